use super::*;
use crate::app::actions::try_take;
use crate::ingest::ingest_file;
use crate::speech::{SpeechEvent, Unsupported};
use std::sync::mpsc;

impl StudyApp {
    /// Lee un archivo en segundo plano; mientras tanto no se puede enviar.
    pub fn load_file(&mut self, name: String, mime: String, bytes: Vec<u8>) {
        if self.upload.is_parsing {
            log::debug!("already parsing a file, ignoring {name:?}");
            return;
        }
        self.upload.begin_file(&name);

        let (tx, rx) = mpsc::channel();
        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            let _ = tx.send(ingest_file(&name, &mime, &bytes));
        });
        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let _ = tx.send(ingest_file(&name, &mime, &bytes));
        });
        self.file_rx = Some(rx);
    }

    /// Carga desde una ruta local (escritorio).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_path(&mut self, path: &std::path::Path) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match std::fs::read(path) {
            Ok(bytes) => self.load_file(name, String::new(), bytes),
            Err(err) => {
                log::error!("could not read {}: {err}", path.display());
                self.upload.finish_file(Err(err.into()));
            }
        }
    }

    pub fn poll_file(&mut self) {
        if let Some(result) = try_take(&self.file_rx) {
            self.file_rx = None;
            self.upload.finish_file(result);
        }
    }

    pub fn text_edited(&mut self) {
        self.upload.text_edited();
    }

    pub fn set_question_count(&mut self, count: usize) {
        self.upload.set_question_count(count);
    }

    pub fn can_dictate(&self) -> bool {
        self.speech.is_supported()
    }

    pub fn toggle_dictation(&mut self) {
        if !self.speech.is_supported() {
            return;
        }
        if self.upload.is_listening {
            self.speech.stop();
            return;
        }

        self.upload.dictation.begin(&self.upload.text);
        if let Err(err) = self.speech.start(self.language.speech_locale()) {
            // Sin reconocimiento usable el micro desaparece de la UI
            log::warn!("speech recognition disabled: {err}");
            self.speech = Box::new(Unsupported);
        }
    }

    pub fn poll_speech(&mut self) {
        for event in self.speech.poll() {
            self.apply_speech_event(event);
        }
    }

    pub fn apply_speech_event(&mut self, event: SpeechEvent) {
        match event {
            SpeechEvent::Started => self.upload.is_listening = true,
            SpeechEvent::Results(fragments) => {
                self.upload.text = self.upload.dictation.compose(&fragments);
            }
            SpeechEvent::Ended => {
                self.upload.is_listening = false;
                self.upload.dictation.commit(&self.upload.text);
            }
            SpeechEvent::Error(reason) => {
                log::warn!("speech recognition error: {reason}");
                self.upload.is_listening = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::test_app;
    use crate::speech::{SpeechEvent, TranscriptFragment};

    fn results(text: &str, is_final: bool) -> SpeechEvent {
        SpeechEvent::Results(vec![TranscriptFragment {
            text: text.into(),
            is_final,
        }])
    }

    #[test]
    fn dictation_appends_to_typed_text() {
        let mut app = test_app();
        app.upload.text = "Lecture 4".into();
        app.upload.dictation.begin(&app.upload.text);

        app.apply_speech_event(SpeechEvent::Started);
        assert!(app.upload.is_listening);
        app.apply_speech_event(results("enzymes", false));
        assert_eq!(app.upload.text, "Lecture 4 enzymes");
        app.apply_speech_event(results("enzymes lower", true));
        assert_eq!(app.upload.text, "Lecture 4 enzymes lower");

        app.apply_speech_event(SpeechEvent::Ended);
        assert!(!app.upload.is_listening);
        assert_eq!(app.upload.dictation.baseline(), "Lecture 4 enzymes lower");
    }

    #[test]
    fn continuous_session_commits_every_final() {
        let mut app = test_app();
        app.upload.text = "Notes".into();
        app.upload.dictation.begin(&app.upload.text);

        app.apply_speech_event(SpeechEvent::Started);
        app.apply_speech_event(SpeechEvent::Results(vec![TranscriptFragment {
            text: "hello".into(),
            is_final: true,
        }]));
        app.apply_speech_event(SpeechEvent::Results(vec![
            TranscriptFragment {
                text: "hello".into(),
                is_final: true,
            },
            TranscriptFragment {
                text: " world".into(),
                is_final: true,
            },
        ]));
        app.apply_speech_event(SpeechEvent::Ended);

        assert_eq!(app.upload.text, "Notes hello world");
        assert_eq!(app.upload.dictation.baseline(), "Notes hello world");
    }

    #[test]
    fn speech_error_stops_listening() {
        let mut app = test_app();
        app.apply_speech_event(SpeechEvent::Started);
        app.apply_speech_event(SpeechEvent::Error("no-speech".into()));
        assert!(!app.upload.is_listening);
    }

    #[test]
    fn unsupported_speech_ignores_toggle() {
        let mut app = test_app();
        assert!(!app.can_dictate());
        app.toggle_dictation();
        assert!(!app.upload.is_listening);
    }

    #[test]
    fn text_file_fills_the_input() {
        let mut app = test_app();
        app.load_file("notes.txt".into(), "text/plain".into(), b"Mitosis".to_vec());
        assert!(app.upload.is_parsing);
        assert!(!app.upload.can_submit());

        let rx = app.file_rx.take().unwrap();
        app.upload.finish_file(rx.recv().unwrap());

        assert!(!app.upload.is_parsing);
        assert_eq!(app.upload.text, "Mitosis");
        assert_eq!(app.upload.file_name.as_deref(), Some("notes.txt"));
    }

    #[test]
    fn missing_path_reports_and_recovers() {
        let mut app = test_app();
        app.load_path(std::path::Path::new("/definitely/not/here.pdf"));
        assert!(!app.upload.is_parsing);
        assert!(app.file_rx.is_none());
    }
}
