//! Sesión de preguntas tipo test: responder, ver explicación, avanzar, puntuar.

use crate::model::Mcq;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    Answering(usize),
    Revealed(usize),
    Completed,
}

/// Rango de conocimiento al terminar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rank {
    Novice,
    Learner,
    Scholar,
    Savant,
}

impl Rank {
    pub fn from_percent(percent: u32) -> Self {
        if percent >= 90 {
            Rank::Savant
        } else if percent >= 70 {
            Rank::Scholar
        } else if percent >= 50 {
            Rank::Learner
        } else {
            Rank::Novice
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Rank::Novice => "rank.novice",
            Rank::Learner => "rank.learner",
            Rank::Scholar => "rank.scholar",
            Rank::Savant => "rank.savant",
        }
    }
}

/// Nota en letra. Sus cortes no coinciden con los de `Rank` y así debe seguir.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LetterGrade {
    APlus,
    A,
    B,
    C,
}

impl LetterGrade {
    pub fn from_percent(percent: u32) -> Self {
        if percent >= 90 {
            LetterGrade::APlus
        } else if percent >= 75 {
            LetterGrade::A
        } else if percent >= 60 {
            LetterGrade::B
        } else {
            LetterGrade::C
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LetterGrade::APlus => "A+",
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
        }
    }
}

/// round(100 * score / total), 0 si no hay preguntas.
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * score as f64 / total as f64).round() as u32
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOutcome {
    pub score: usize,
    pub total: usize,
    pub percent: u32,
    pub rank: Rank,
    pub letter: LetterGrade,
}

impl QuizOutcome {
    pub fn new(score: usize, total: usize) -> Self {
        let percent = percentage(score, total);
        Self {
            score,
            total,
            percent,
            rank: Rank::from_percent(percent),
            letter: LetterGrade::from_percent(percent),
        }
    }

    pub fn headline_key(&self) -> &'static str {
        if self.percent >= 70 {
            "quiz.excellence"
        } else {
            "quiz.completed"
        }
    }
}

/// Progreso del test sobre las preguntas de un único `StudySet`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizSession {
    current_index: usize,
    selected_option: Option<usize>,
    score: usize,
    completed: bool,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> QuizPhase {
        if self.completed {
            QuizPhase::Completed
        } else if self.selected_option.is_some() {
            QuizPhase::Revealed(self.current_index)
        } else {
            QuizPhase::Answering(self.current_index)
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.selected_option
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn current<'a>(&self, mcqs: &'a [Mcq]) -> Option<&'a Mcq> {
        if self.completed {
            None
        } else {
            mcqs.get(self.current_index)
        }
    }

    /// Fija la primera opción elegida; las siguientes no cambian nada.
    /// Devuelve `Some(correcta)` solo si la selección se ha aceptado.
    pub fn select(&mut self, option: usize, mcqs: &[Mcq]) -> Option<bool> {
        if self.selected_option.is_some() {
            return None;
        }
        let mcq = self.current(mcqs)?;
        if option >= mcq.options.len() {
            return None;
        }

        let correct = mcq.is_correct(option);
        self.selected_option = Some(option);
        if correct {
            self.score += 1;
        }
        Some(correct)
    }

    /// Pasa a la siguiente pregunta, o termina tras la última.
    pub fn advance(&mut self, mcqs: &[Mcq]) {
        if self.completed || self.selected_option.is_none() {
            return;
        }
        if self.current_index + 1 < mcqs.len() {
            self.current_index += 1;
            self.selected_option = None;
        } else {
            self.completed = true;
        }
    }

    pub fn is_last(&self, mcqs: &[Mcq]) -> bool {
        self.current_index + 1 >= mcqs.len()
    }

    pub fn retry(&mut self) {
        *self = Self::new();
    }

    pub fn outcome(&self, mcqs: &[Mcq]) -> Option<QuizOutcome> {
        self.completed
            .then(|| QuizOutcome::new(self.score, mcqs.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mcq(correct: usize) -> Mcq {
        Mcq {
            question: format!("q{correct}"),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_answer_index: correct,
            explanation: "because".into(),
        }
    }

    fn play(mcqs: &[Mcq], answers: &[usize]) -> QuizSession {
        let mut session = QuizSession::new();
        for &answer in answers {
            session.select(answer, mcqs);
            session.advance(mcqs);
        }
        session
    }

    #[test]
    fn banding_table() {
        let cases = [
            (100, Rank::Savant, "A+"),
            (90, Rank::Savant, "A+"),
            (89, Rank::Scholar, "A"),
            (75, Rank::Scholar, "A"),
            (74, Rank::Scholar, "B"),
            (70, Rank::Scholar, "B"),
            (69, Rank::Learner, "B"),
            (60, Rank::Learner, "B"),
            (59, Rank::Learner, "C"),
            (50, Rank::Learner, "C"),
            (49, Rank::Novice, "C"),
            (0, Rank::Novice, "C"),
        ];
        for (pct, rank, letter) in cases {
            assert_eq!(Rank::from_percent(pct), rank, "rank at {pct}");
            assert_eq!(LetterGrade::from_percent(pct).as_str(), letter, "letter at {pct}");
        }
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(5, 5), 100);
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn phases_walk_through_each_question() {
        let mcqs = vec![mcq(0), mcq(1)];
        let mut session = QuizSession::new();
        assert_eq!(session.phase(), QuizPhase::Answering(0));

        session.advance(&mcqs);
        assert_eq!(session.phase(), QuizPhase::Answering(0));

        assert_eq!(session.select(0, &mcqs), Some(true));
        assert_eq!(session.phase(), QuizPhase::Revealed(0));
        session.advance(&mcqs);
        assert_eq!(session.phase(), QuizPhase::Answering(1));
        assert!(session.is_last(&mcqs));

        assert_eq!(session.select(3, &mcqs), Some(false));
        session.advance(&mcqs);
        assert_eq!(session.phase(), QuizPhase::Completed);
        assert!(session.current(&mcqs).is_none());
    }

    #[test]
    fn second_selection_is_ignored() {
        let mcqs = vec![mcq(2)];
        let mut session = QuizSession::new();

        assert_eq!(session.select(1, &mcqs), Some(false));
        assert_eq!(session.select(2, &mcqs), None);
        assert_eq!(session.selected_option(), Some(1));
        assert_eq!(session.score(), 0);

        let mut lucky = QuizSession::new();
        lucky.select(2, &mcqs);
        lucky.select(0, &mcqs);
        assert_eq!(lucky.score(), 1);
        assert_eq!(lucky.selected_option(), Some(2));
    }

    #[test]
    fn score_counts_first_correct_selections() {
        let mcqs = vec![mcq(0), mcq(1), mcq(2), mcq(3), mcq(0)];
        let session = play(&mcqs, &[0, 0, 2, 1, 0]);
        let outcome = session.outcome(&mcqs).unwrap();

        assert_eq!(outcome.score, 3);
        assert_eq!(outcome.total, 5);
        assert_eq!(outcome.percent, 60);
        assert_eq!(outcome.rank, Rank::Learner);
        assert_eq!(outcome.letter, LetterGrade::B);
        assert_eq!(outcome.headline_key(), "quiz.completed");
    }

    #[test]
    fn perfect_run_is_savant() {
        let mcqs = vec![mcq(1), mcq(2)];
        let outcome = play(&mcqs, &[1, 2]).outcome(&mcqs).unwrap();
        assert_eq!(outcome.percent, 100);
        assert_eq!(outcome.rank, Rank::Savant);
        assert_eq!(outcome.headline_key(), "quiz.excellence");
    }

    #[test]
    fn out_of_range_selection_is_rejected() {
        let mcqs = vec![mcq(0)];
        let mut session = QuizSession::new();
        assert_eq!(session.select(9, &mcqs), None);
        assert_eq!(session.phase(), QuizPhase::Answering(0));
    }

    #[test]
    fn out_of_range_answer_never_scores() {
        let mut broken = mcq(0);
        broken.correct_answer_index = 4;
        let mcqs = vec![broken];
        let session = play(&mcqs, &[3]);
        assert_eq!(session.outcome(&mcqs).unwrap().score, 0);
    }

    #[test]
    fn retry_starts_over() {
        let mcqs = vec![mcq(0), mcq(1)];
        let mut session = play(&mcqs, &[0, 1]);
        assert!(session.is_completed());

        session.retry();
        assert_eq!(session.phase(), QuizPhase::Answering(0));
        assert_eq!(session.score(), 0);
        assert!(session.outcome(&mcqs).is_none());
    }

    #[test]
    fn empty_quiz_never_completes_or_divides() {
        let mcqs: Vec<Mcq> = vec![];
        let mut session = QuizSession::new();
        assert_eq!(session.select(0, &mcqs), None);
        session.advance(&mcqs);
        assert_eq!(session.phase(), QuizPhase::Answering(0));
        assert!(session.current(&mcqs).is_none());
    }
}
