use super::*;

impl StudyApp {
    /// Vuelve a la pantalla de subida limpia. El idioma se conserva.
    pub fn reset(&mut self) {
        if self.upload.is_listening {
            self.speech.stop();
        }

        self.state = AppState::Upload;
        self.study_set = None;
        self.loading = false;
        self.error = None;
        self.upload = UploadForm::default();
        self.quiz = QuizSession::new();
        self.deck = FlashcardDeck::new();
        // Un resultado tardío se descarta al soltar el receptor
        self.generation_rx = None;
        self.search_rx = None;
        self.file_rx = None;
        log::info!("study session reset");
    }

    pub fn retry_quiz(&mut self) {
        self.quiz.retry();
    }
}

#[cfg(test)]
mod tests {
    use crate::app::test_app;
    use crate::model::{AppState, Language, StudySet};

    #[test]
    fn reset_from_any_view_returns_to_a_clean_upload() {
        for view in [AppState::Summary, AppState::Flashcards, AppState::Mcqs] {
            let mut app = test_app();
            app.language = Language::Si;
            app.study_set = Some(StudySet::default());
            app.state = view;
            app.error = Some("boom".into());
            app.upload.text = "notes".into();
            app.upload.set_question_count(12);
            app.deck.next(4);

            app.reset();

            assert_eq!(app.state, AppState::Upload);
            assert!(app.study_set.is_none());
            assert!(app.error.is_none());
            assert!(app.upload.text.is_empty());
            assert_eq!(app.upload.question_count, 5);
            assert_eq!(app.deck.index(), 0);
            assert_eq!(app.language, Language::Si);
        }
    }
}
