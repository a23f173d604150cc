use crate::client::GeminiClient;
use crate::data::read_strings_embedded;
use crate::deck::FlashcardDeck;
use crate::error::Result;
use crate::i18n::{Strings, Tr};
use crate::ingest::{Ingested, UploadForm};
use crate::model::{AppState, Language, SearchSource, StudySet};
use crate::quiz::QuizSession;
use crate::speech::{self, SpeechCapability};
use egui_commonmark::CommonMarkCache;
use std::sync::Arc;
use std::sync::mpsc::Receiver;

// Submódulos
pub mod actions;
pub mod ingestion;
pub mod navigation;
pub mod practice;
pub mod resets;

pub struct StudyApp {
    pub state: AppState,
    pub language: Language,
    pub study_set: Option<StudySet>,
    pub loading: bool,
    pub error: Option<String>,
    pub upload: UploadForm,
    pub quiz: QuizSession,
    pub deck: FlashcardDeck,
    pub strings: Arc<Strings>,
    pub client: GeminiClient,
    pub speech: Box<dyn SpeechCapability>,
    pub cm_cache: CommonMarkCache,
    generation_rx: Option<Receiver<Result<StudySet>>>,
    search_rx: Option<Receiver<Result<Vec<SearchSource>>>>,
    file_rx: Option<Receiver<Result<Ingested>>>,
}

impl StudyApp {
    pub fn new() -> Self {
        Self::with_parts(GeminiClient::from_env(), speech::detect())
    }

    pub fn with_parts(client: GeminiClient, speech: Box<dyn SpeechCapability>) -> Self {
        // Los textos van embebidos en el binario: si no parsean es un fallo de compilación del paquete
        let strings = read_strings_embedded().expect("embedded strings.yaml is invalid");

        if !client.has_api_key() {
            log::warn!("no API key configured, generation requests will fail");
        }

        Self {
            state: AppState::Upload,
            language: Language::default(),
            study_set: None,
            loading: false,
            error: None,
            upload: UploadForm::default(),
            quiz: QuizSession::new(),
            deck: FlashcardDeck::new(),
            strings: Arc::new(strings),
            client,
            speech,
            cm_cache: CommonMarkCache::default(),
            generation_rx: None,
            search_rx: None,
            file_rx: None,
        }
    }

    pub fn tr(&self) -> Tr<'_> {
        Tr::new(&self.strings, self.language)
    }

    /// Recoge resultados de tareas en segundo plano. Devuelve si queda alguna pendiente.
    pub fn poll_background(&mut self) -> bool {
        self.poll_generation();
        self.poll_search();
        self.poll_file();
        self.poll_speech();

        self.generation_rx.is_some()
            || self.search_rx.is_some()
            || self.file_rx.is_some()
            || self.upload.is_listening
    }
}

impl Default for StudyApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) fn test_app() -> StudyApp {
    use crate::config::ClientConfig;
    StudyApp::with_parts(
        GeminiClient::new(ClientConfig::default()),
        Box::new(crate::speech::Unsupported),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_an_empty_upload_screen() {
        let app = test_app();
        assert_eq!(app.state, AppState::Upload);
        assert_eq!(app.language, Language::En);
        assert!(app.study_set.is_none());
        assert!(!app.loading);
        assert!(app.error.is_none());
        assert_eq!(app.upload.question_count, 5);
        assert!(app.generation_rx.is_none());
        assert!(app.search_rx.is_none());
    }

    #[test]
    fn nothing_pending_after_an_idle_poll() {
        let mut app = test_app();
        assert!(!app.poll_background());
    }
}
