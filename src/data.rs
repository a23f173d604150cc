// src/data.rs

use crate::i18n::Strings;
use serde_yaml;

/// Carga la tabla de textos de la interfaz desde el YAML embebido
pub fn read_strings_embedded() -> Result<Strings, serde_yaml::Error> {
    let file_content = include_str!("data/strings.yaml");
    serde_yaml::from_str(file_content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Language;

    #[test]
    fn embedded_table_parses() {
        let strings = read_strings_embedded().unwrap();
        assert!(strings.len() > 50);
    }

    #[test]
    fn keys_chosen_by_code_exist() {
        use crate::quiz::{QuizOutcome, Rank};

        let strings = read_strings_embedded().unwrap();
        let mut keys = vec![
            "error.generation",
            "quiz.empty",
            "flash.empty",
            "upload.chars",
        ];
        keys.extend(
            [Rank::Novice, Rank::Learner, Rank::Scholar, Rank::Savant].map(Rank::label_key),
        );
        keys.push(QuizOutcome::new(1, 1).headline_key());
        keys.push(QuizOutcome::new(0, 1).headline_key());

        for key in keys {
            assert!(strings.contains(key), "falta {key}");
        }
    }

    #[test]
    fn every_entry_is_translated() {
        let strings = read_strings_embedded().unwrap();
        for key in strings.keys() {
            for lang in Language::ALL {
                assert!(
                    !strings.get(key, lang).trim().is_empty(),
                    "{key} vacío en {}",
                    lang.code()
                );
            }
        }
    }
}
