use super::*;

// Acciones de tarjetas y test sobre el StudySet actual.
impl StudyApp {
    pub fn flip_card(&mut self) {
        self.deck.flip();
    }

    pub fn next_card(&mut self) {
        let len = self.flashcard_count();
        self.deck.next(len);
    }

    pub fn previous_card(&mut self) {
        let len = self.flashcard_count();
        self.deck.previous(len);
    }

    fn flashcard_count(&self) -> usize {
        self.study_set.as_ref().map_or(0, |s| s.flashcards.len())
    }

    pub fn select_option(&mut self, option: usize) {
        let Some(set) = self.study_set.as_ref() else {
            return;
        };
        if let Some(correct) = self.quiz.select(option, &set.mcqs) {
            log::debug!(
                "question {} answered {}",
                self.quiz.current_index() + 1,
                if correct { "correctly" } else { "wrongly" }
            );
        }
    }

    pub fn next_question(&mut self) {
        if let Some(set) = self.study_set.as_ref() {
            self.quiz.advance(&set.mcqs);
            if let Some(outcome) = self.quiz.outcome(&set.mcqs) {
                log::info!(
                    "quiz finished: {}/{} ({}%)",
                    outcome.score,
                    outcome.total,
                    outcome.percent
                );
            }
        }
    }
}
