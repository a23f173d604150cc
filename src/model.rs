use serde::{Deserialize, Serialize};

/// Idioma de la interfaz y del contenido generado.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Language {
    #[default]
    En,
    Si,
    Ta,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Si, Language::Ta];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Si => "si",
            Language::Ta => "ta",
        }
    }

    /// Etiqueta corta del selector de idioma en la barra superior.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Si => "සිං",
            Language::Ta => "தமி",
        }
    }

    /// Locale BCP-47 para el reconocimiento de voz.
    pub fn speech_locale(self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Si => "si-LK",
            Language::Ta => "ta-LK",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppState {
    #[default]
    Upload,
    Summary,
    Flashcards,
    Mcqs,
}

impl AppState {
    pub fn needs_study_set(self) -> bool {
        !matches!(self, AppState::Upload)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Flashcard {
    pub front: String, // Pregunta
    pub back: String,  // Respuesta
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Mcq {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer_index: usize,
    pub explanation: String,
}

impl Mcq {
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_answer_index
    }

    pub fn correct_option(&self) -> Option<&str> {
        self.options
            .get(self.correct_answer_index)
            .map(String::as_str)
    }
}

/// Lo que devuelve el modelo: se reemplaza entero en cada generación.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StudySet {
    pub title: String,
    pub summary: String,
    pub flashcards: Vec<Flashcard>,
    pub mcqs: Vec<Mcq>,
}

impl StudySet {
    /// Párrafos del resumen, separados por líneas en blanco.
    pub fn summary_paragraphs(&self) -> impl Iterator<Item = &str> {
        self.summary
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchSource {
    pub title: String,
    pub uri: String,
    pub snippet: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub data: String, // base64 sin prefijo data:
    pub mime_type: String,
}

/// Material de estudio que se envía al modelo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Images(Vec<InlineImage>),
    Topic { topic: String, source_uri: String },
}

impl Content {
    pub fn kind(&self) -> &'static str {
        match self {
            Content::Text(_) => "text",
            Content::Images(_) => "images",
            Content::Topic { .. } => "topic",
        }
    }

    /// Solo el estudio por tema activa la búsqueda de Google en el modelo.
    pub fn uses_search(&self) -> bool {
        matches!(self, Content::Topic { .. })
    }
}
