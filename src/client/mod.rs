//! Cliente del modelo generativo. Una llamada = una petición: sin reintentos ni caché.

pub mod gemini;
mod transport;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::model::{Content, Language, SearchSource, StudySet};
use gemini::{build_search_request, build_study_request, collect_sources, parse_study_set};

#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: ClientConfig,
}

impl GeminiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn has_api_key(&self) -> bool {
        self.config.api_key.is_some()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn generate_study_set(
        &self,
        content: &Content,
        language: Language,
        question_count: usize,
    ) -> Result<StudySet> {
        log_generation(content, language, question_count);
        let payload = build_study_request(content, language, question_count);
        let response = transport::post(&self.config, &payload)?;
        parse_study_set(&response, question_count)
    }

    #[cfg(target_arch = "wasm32")]
    pub async fn generate_study_set(
        &self,
        content: &Content,
        language: Language,
        question_count: usize,
    ) -> Result<StudySet> {
        log_generation(content, language, question_count);
        let payload = build_study_request(content, language, question_count);
        let response = transport::post(&self.config, &payload).await?;
        parse_study_set(&response, question_count)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn search_sources(&self, query: &str, language: Language) -> Result<Vec<SearchSource>> {
        log::info!("searching sources for {query:?} ({})", language.code());
        let response = transport::post(&self.config, &build_search_request(query))?;
        Ok(collect_sources(&response, query))
    }

    #[cfg(target_arch = "wasm32")]
    pub async fn search_sources(
        &self,
        query: &str,
        language: Language,
    ) -> Result<Vec<SearchSource>> {
        log::info!("searching sources for {query:?} ({})", language.code());
        let response = transport::post(&self.config, &build_search_request(query)).await?;
        Ok(collect_sources(&response, query))
    }
}

fn log_generation(content: &Content, language: Language, question_count: usize) {
    log::info!(
        "generating study set from {} content ({}, {question_count} questions)",
        content.kind(),
        language.code()
    );
}
