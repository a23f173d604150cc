use super::*;
use crate::error::StudyError;
use crate::model::Content;
use std::sync::mpsc::{self, TryRecvError};

/// Resultado de un canal de una sola respuesta: `None` si aún no ha llegado.
/// Si el emisor desaparece sin enviar nada se entrega `Interrupted`.
pub(crate) fn try_take<T>(rx: &Option<Receiver<Result<T>>>) -> Option<Result<T>> {
    match rx.as_ref()?.try_recv() {
        Ok(result) => Some(result),
        Err(TryRecvError::Empty) => None,
        Err(TryRecvError::Disconnected) => Some(Err(StudyError::Interrupted)),
    }
}

impl StudyApp {
    pub fn submit_upload(&mut self) {
        match self.upload.content() {
            Some(content) => self.submit(content),
            None => log::debug!("upload not ready to submit"),
        }
    }

    /// Lanza la generación del material. Solo una a la vez.
    pub fn submit(&mut self, content: Content) {
        if self.loading {
            log::debug!("generation already in flight, ignoring submit");
            return;
        }

        self.loading = true;
        self.error = None;
        self.generation_rx = Some(self.spawn_generation(content));
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn spawn_generation(&self, content: Content) -> Receiver<Result<StudySet>> {
        let (tx, rx) = mpsc::channel();
        let client = self.client.clone();
        let language = self.language;
        let count = self.upload.question_count;

        std::thread::spawn(move || {
            let _ = tx.send(client.generate_study_set(&content, language, count));
        });
        rx
    }

    #[cfg(target_arch = "wasm32")]
    fn spawn_generation(&self, content: Content) -> Receiver<Result<StudySet>> {
        let (tx, rx) = mpsc::channel();
        let client = self.client.clone();
        let language = self.language;
        let count = self.upload.question_count;

        wasm_bindgen_futures::spawn_local(async move {
            let result = client.generate_study_set(&content, language, count).await;
            let _ = tx.send(result);
        });
        rx
    }

    pub fn poll_generation(&mut self) {
        if let Some(result) = try_take(&self.generation_rx) {
            self.generation_rx = None;
            self.apply_generation_result(result);
        }
    }

    pub fn apply_generation_result(&mut self, result: Result<StudySet>) {
        self.loading = false;
        match result {
            Ok(study_set) => {
                log::info!(
                    "study set ready: {:?} ({} flashcards, {} questions)",
                    study_set.title,
                    study_set.flashcards.len(),
                    study_set.mcqs.len()
                );
                self.study_set = Some(study_set);
                self.quiz = QuizSession::new();
                self.deck = FlashcardDeck::new();
                self.error = None;
                self.state = AppState::Summary;
            }
            Err(err) => {
                log::error!("study set generation failed: {err}");
                self.error = Some(self.tr().t("error.generation").to_string());
                self.state = AppState::Upload;
            }
        }
    }

    pub fn start_search(&mut self) {
        let query = self.upload.search_query.trim().to_string();
        if query.is_empty() || self.upload.is_searching {
            return;
        }

        self.upload.is_searching = true;
        self.upload.search_results.clear();
        self.search_rx = Some(self.spawn_search(query));
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn spawn_search(&self, query: String) -> Receiver<Result<Vec<SearchSource>>> {
        let (tx, rx) = mpsc::channel();
        let client = self.client.clone();
        let language = self.language;

        std::thread::spawn(move || {
            let _ = tx.send(client.search_sources(&query, language));
        });
        rx
    }

    #[cfg(target_arch = "wasm32")]
    fn spawn_search(&self, query: String) -> Receiver<Result<Vec<SearchSource>>> {
        let (tx, rx) = mpsc::channel();
        let client = self.client.clone();
        let language = self.language;

        wasm_bindgen_futures::spawn_local(async move {
            let result = client.search_sources(&query, language).await;
            let _ = tx.send(result);
        });
        rx
    }

    pub fn poll_search(&mut self) {
        if let Some(result) = try_take(&self.search_rx) {
            self.search_rx = None;
            self.apply_search_result(result);
        }
    }

    /// Un fallo de búsqueda no muestra error: la lista queda vacía.
    pub fn apply_search_result(&mut self, result: Result<Vec<SearchSource>>) {
        self.upload.is_searching = false;
        match result {
            Ok(sources) => {
                log::info!("search returned {} sources", sources.len());
                self.upload.search_results = sources;
            }
            Err(err) => {
                log::error!("source search failed: {err}");
                self.upload.search_results.clear();
            }
        }
    }

    /// Estudia el tema de una fuente encontrada.
    pub fn study_source(&mut self, index: usize) {
        let Some(source) = self.upload.search_results.get(index).cloned() else {
            return;
        };
        self.submit(Content::Topic {
            topic: source.title,
            source_uri: source.uri,
        });
    }
}
