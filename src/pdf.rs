//! Lectura de PDF: texto por página y la imagen escaneada de cada página.
//!
//! Las páginas de un escaneo suelen ser una única imagen JPEG (`DCTDecode`);
//! esa imagen es la captura de la página que se envía al modelo.

use crate::error::{Result, StudyError};
use crate::model::InlineImage;
use base64::Engine;
use lopdf::{Dictionary, Document, Object, ObjectId};

/// Solo se procesan las primeras páginas para acotar tiempo y memoria.
pub const MAX_PAGES: usize = 10;

const MAX_TREE_DEPTH: usize = 32;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PdfPages {
    pub text: String,
    pub page_images: Vec<InlineImage>,
}

/// Fuente de páginas de un documento; `LopdfSource` es la implementación real.
pub trait PageSource {
    fn page_count(&self) -> usize;
    fn page_text(&self, page: usize) -> Result<String>;
    fn page_image(&self, page: usize) -> Result<Option<InlineImage>>;
}

/// Recorre las páginas en orden: una línea de texto y como mucho una imagen por página.
pub fn read_pages(source: &dyn PageSource) -> Result<PdfPages> {
    let mut pages = PdfPages::default();

    for page in 0..source.page_count().min(MAX_PAGES) {
        let text = source.page_text(page)?;
        let words: Vec<&str> = text.split_whitespace().collect();
        pages.text.push_str(&words.join(" "));
        pages.text.push('\n');

        if let Some(image) = source.page_image(page)? {
            pages.page_images.push(image);
        }
    }

    log::debug!(
        "read {} pdf pages, {} chars, {} page images",
        source.page_count().min(MAX_PAGES),
        pages.text.trim().chars().count(),
        pages.page_images.len()
    );
    Ok(pages)
}

pub struct LopdfSource {
    doc: Document,
    pages: Vec<(u32, ObjectId)>,
}

impl LopdfSource {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let doc = Document::load_mem(bytes)?;
        let pages = doc.get_pages().into_iter().collect();
        Ok(Self { doc, pages })
    }

    fn page(&self, page: usize) -> Result<(u32, ObjectId)> {
        self.pages
            .get(page)
            .copied()
            .ok_or_else(|| StudyError::Pdf(format!("page {} out of range", page + 1)))
    }

    fn resolve<'a>(&'a self, obj: &'a Object) -> Option<&'a Object> {
        match obj {
            Object::Reference(id) => self.doc.get_object(*id).ok(),
            other => Some(other),
        }
    }

    fn resolve_dict<'a>(&'a self, obj: &'a Object) -> Option<&'a Dictionary> {
        self.resolve(obj)?.as_dict().ok()
    }

    /// Los recursos pueden heredarse del nodo `Pages` padre.
    fn page_resources(&self, page_id: ObjectId) -> Option<&Dictionary> {
        let mut node = self.doc.get_dictionary(page_id).ok()?;
        for _ in 0..MAX_TREE_DEPTH {
            if let Ok(resources) = node.get(b"Resources") {
                return self.resolve_dict(resources);
            }
            let parent = node.get(b"Parent").ok()?.as_reference().ok()?;
            node = self.doc.get_dictionary(parent).ok()?;
        }
        None
    }

    fn first_jpeg(&self, resources: &Dictionary) -> Option<Vec<u8>> {
        let xobjects = self.resolve_dict(resources.get(b"XObject").ok()?)?;

        xobjects.iter().find_map(|(_, obj)| {
            let stream = self.resolve(obj)?.as_stream().ok()?;
            let is_image = matches!(
                stream.dict.get(b"Subtype"),
                Ok(Object::Name(name)) if name.as_slice() == b"Image"
            );
            if is_image && is_dct(stream.dict.get(b"Filter").ok()) {
                Some(stream.content.clone())
            } else {
                None
            }
        })
    }
}

fn is_dct(filter: Option<&Object>) -> bool {
    match filter {
        Some(Object::Name(name)) => name.as_slice() == b"DCTDecode",
        Some(Object::Array(items)) => {
            // Solo sirve si DCT es el único filtro: otro filtro delante exigiría decodificar
            items.len() == 1 && is_dct(items.first())
        }
        _ => false,
    }
}

impl PageSource for LopdfSource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, page: usize) -> Result<String> {
        let (number, _) = self.page(page)?;
        Ok(self.doc.extract_text(&[number])?)
    }

    fn page_image(&self, page: usize) -> Result<Option<InlineImage>> {
        let (_, page_id) = self.page(page)?;
        let jpeg = self
            .page_resources(page_id)
            .and_then(|resources| self.first_jpeg(resources));

        Ok(jpeg.map(|bytes| InlineImage {
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
            mime_type: "image/jpeg".to_string(),
        }))
    }
}
