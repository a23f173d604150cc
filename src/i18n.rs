use crate::model::Language;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Deserialize, Debug, Clone)]
pub struct Entry {
    pub en: String,
    pub si: String,
    pub ta: String,
}

impl Entry {
    fn pick(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.en,
            Language::Si => &self.si,
            Language::Ta => &self.ta,
        }
    }
}

/// Tabla (clave, idioma) -> texto. Se carga una vez y se comparte por referencia.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(transparent)]
pub struct Strings {
    entries: HashMap<String, Entry>,
}

impl Strings {
    /// Devuelve la propia clave si no existe, así un texto que falta se ve en pantalla.
    pub fn get<'a>(&'a self, key: &'a str, lang: Language) -> &'a str {
        self.entries.get(key).map(|e| e.pick(lang)).unwrap_or(key)
    }

}

#[cfg(test)]
impl Strings {
    pub(crate) fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Vista de la tabla fijada a un idioma; es lo que reciben las vistas.
#[derive(Clone, Copy)]
pub struct Tr<'a> {
    strings: &'a Strings,
    language: Language,
}

impl<'a> Tr<'a> {
    pub fn new(strings: &'a Strings, language: Language) -> Self {
        Self { strings, language }
    }

    pub fn t(&self, key: &'a str) -> &'a str {
        self.strings.get(key, self.language)
    }

    pub fn language(&self) -> Language {
        self.language
    }
}
