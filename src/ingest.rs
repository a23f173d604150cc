//! Formulario de entrada: texto, archivos, número de preguntas y búsqueda de temas.

use crate::error::Result;
use crate::model::{Content, InlineImage, SearchSource};
use crate::pdf::{self, LopdfSource, PdfPages};
use crate::speech::DictationBuffer;
use base64::Engine;

pub const MIN_TEXT_CHARS: usize = 50;
/// Por debajo de este texto extraído, un PDF con imágenes se trata como escaneo.
pub const SCANNED_TEXT_THRESHOLD: usize = 200;
pub const MIN_QUESTIONS: usize = 1;
pub const MAX_QUESTIONS: usize = 20;
pub const DEFAULT_QUESTIONS: usize = 5;

const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "webp", "bmp", "heic"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Image,
    Text,
}

fn extension(name: &str) -> String {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default()
}

impl FileKind {
    /// Decide por tipo MIME y, si falta, por extensión.
    pub fn detect(name: &str, mime: &str) -> Self {
        let mime = mime.trim().to_ascii_lowercase();
        if mime == "application/pdf" {
            return FileKind::Pdf;
        }
        if mime.starts_with("image/") {
            return FileKind::Image;
        }
        if !mime.is_empty() {
            return FileKind::Text;
        }

        let ext = extension(name);
        if ext == "pdf" {
            FileKind::Pdf
        } else if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            FileKind::Image
        } else {
            FileKind::Text
        }
    }
}

fn image_mime(name: &str, mime: &str) -> String {
    let mime = mime.trim();
    if !mime.is_empty() {
        return mime.to_string();
    }
    match extension(name).as_str() {
        "jpg" | "jpeg" => "image/jpeg".into(),
        "svg" => "image/svg+xml".into(),
        ext => format!("image/{ext}"),
    }
}

/// Resultado de leer un archivo: texto para el área de entrada o imágenes para el modelo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Ingested {
    Text(String),
    Images {
        images: Vec<InlineImage>,
        label: String,
    },
}

/// Un PDF con poco texto y alguna página capturada se estudia a partir de las imágenes.
pub fn choose_pdf_mode(pages: PdfPages) -> Ingested {
    let text_chars = pages.text.trim().chars().count();
    if text_chars < SCANNED_TEXT_THRESHOLD && !pages.page_images.is_empty() {
        let label = format!(
            "[Document Image Mode: {} pages captured]",
            pages.page_images.len()
        );
        Ingested::Images {
            images: pages.page_images,
            label,
        }
    } else {
        Ingested::Text(pages.text)
    }
}

pub fn ingest_file(name: &str, mime: &str, bytes: &[u8]) -> Result<Ingested> {
    let kind = FileKind::detect(name, mime);
    log::info!("ingesting {name:?} as {kind:?} ({} bytes)", bytes.len());

    match kind {
        FileKind::Pdf => {
            let source = LopdfSource::from_bytes(bytes)?;
            Ok(choose_pdf_mode(pdf::read_pages(&source)?))
        }
        FileKind::Image => Ok(Ingested::Images {
            images: vec![InlineImage {
                data: base64::engine::general_purpose::STANDARD.encode(bytes),
                mime_type: image_mime(name, mime),
            }],
            label: format!("[Image Capture: {name}]"),
        }),
        FileKind::Text => Ok(Ingested::Text(String::from_utf8_lossy(bytes).into_owned())),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Upload,
    Search,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadForm {
    pub mode: InputMode,
    pub text: String,
    pub images: Vec<InlineImage>,
    pub file_name: Option<String>,
    pub is_parsing: bool,
    pub question_count: usize,
    pub dictation: DictationBuffer,
    pub is_listening: bool,
    pub search_query: String,
    pub search_results: Vec<SearchSource>,
    pub is_searching: bool,
    pub path_input: String,
}

impl Default for UploadForm {
    fn default() -> Self {
        Self {
            mode: InputMode::default(),
            text: String::new(),
            images: Vec::new(),
            file_name: None,
            is_parsing: false,
            question_count: DEFAULT_QUESTIONS,
            dictation: DictationBuffer::default(),
            is_listening: false,
            search_query: String::new(),
            search_results: Vec::new(),
            is_searching: false,
            path_input: String::new(),
        }
    }
}

impl UploadForm {
    pub fn text_chars(&self) -> usize {
        self.text.trim().chars().count()
    }

    pub fn can_submit(&self) -> bool {
        !self.is_parsing && (!self.images.is_empty() || self.text_chars() >= MIN_TEXT_CHARS)
    }

    /// Si hay imágenes se envían ellas y se ignora el texto.
    pub fn content(&self) -> Option<Content> {
        if !self.can_submit() {
            return None;
        }
        if self.images.is_empty() {
            Some(Content::Text(self.text.clone()))
        } else {
            Some(Content::Images(self.images.clone()))
        }
    }

    pub fn set_question_count(&mut self, count: usize) {
        self.question_count = count.clamp(MIN_QUESTIONS, MAX_QUESTIONS);
    }

    /// Escribir a mano descarta el archivo cargado y fija la base del dictado.
    pub fn text_edited(&mut self) {
        self.images.clear();
        self.file_name = None;
        self.dictation.begin(&self.text);
    }

    pub fn begin_file(&mut self, name: &str) {
        self.file_name = Some(name.to_string());
        self.text.clear();
        self.images.clear();
        self.is_parsing = true;
    }

    pub fn finish_file(&mut self, result: Result<Ingested>) {
        self.is_parsing = false;
        match result {
            Ok(Ingested::Text(text)) => {
                self.text = text;
                self.images.clear();
            }
            Ok(Ingested::Images { images, label }) => {
                self.text = label;
                self.images = images;
            }
            Err(err) => {
                log::error!("file ingestion failed: {err}");
                self.file_name = None;
                self.images.clear();
            }
        }
        self.dictation.begin(&self.text);
    }

    pub fn has_file(&self) -> bool {
        self.file_name.is_some()
    }
}
