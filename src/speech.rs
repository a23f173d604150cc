//! Dictado por voz. Solo existe en navegadores con `SpeechRecognition`;
//! en el resto de plataformas la capacidad está ausente y la UI oculta el micro.

use crate::error::{Result, StudyError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptFragment {
    pub text: String,
    pub is_final: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpeechEvent {
    Started,
    /// Todos los resultados de la sesión en curso, no solo los nuevos.
    Results(Vec<TranscriptFragment>),
    Ended,
    Error(String),
}

pub trait SpeechCapability {
    fn is_supported(&self) -> bool;
    fn start(&mut self, locale: &str) -> Result<()>;
    fn stop(&mut self);
    /// Eventos recibidos desde la última llamada, en orden.
    fn poll(&mut self) -> Vec<SpeechEvent>;
}

#[derive(Debug, Default)]
pub struct Unsupported;

impl SpeechCapability for Unsupported {
    fn is_supported(&self) -> bool {
        false
    }

    fn start(&mut self, _locale: &str) -> Result<()> {
        Err(StudyError::Browser("speech recognition unavailable".into()))
    }

    fn stop(&mut self) {}

    fn poll(&mut self) -> Vec<SpeechEvent> {
        Vec::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn detect() -> Box<dyn SpeechCapability> {
    Box::new(Unsupported)
}

#[cfg(target_arch = "wasm32")]
pub fn detect() -> Box<dyn SpeechCapability> {
    match web::WebSpeech::new() {
        Some(speech) => Box::new(speech),
        None => {
            log::info!("speech recognition not available in this browser");
            Box::new(Unsupported)
        }
    }
}

/// Texto del área de entrada mientras se dicta.
///
/// `baseline` es lo que había al empezar (o al terminar el último dictado);
/// cada resultado se añade detrás sin tocarlo.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DictationBuffer {
    baseline: String,
}

impl DictationBuffer {
    pub fn baseline(&self) -> &str {
        &self.baseline
    }

    pub fn begin(&mut self, current_text: &str) {
        self.baseline = current_text.to_string();
    }

    /// Finales primero y provisionales después, como los entrega el navegador.
    pub fn compose(&self, fragments: &[TranscriptFragment]) -> String {
        let finals: String = fragments
            .iter()
            .filter(|f| f.is_final)
            .map(|f| f.text.as_str())
            .collect();
        let interims: String = fragments
            .iter()
            .filter(|f| !f.is_final)
            .map(|f| f.text.as_str())
            .collect();

        if finals.is_empty() && interims.is_empty() {
            return self.baseline.clone();
        }

        let separator = if self.baseline.is_empty() { "" } else { " " };
        format!("{}{separator}{finals}{interims}", self.baseline)
    }

    /// Al parar, el texto actual pasa a ser la nueva base.
    pub fn commit(&mut self, current_text: &str) {
        self.baseline = current_text.to_string();
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{SpeechCapability, SpeechEvent, TranscriptFragment};
    use crate::error::{Result, StudyError};
    use js_sys::{Array, Function, Reflect};
    use std::sync::mpsc::{self, Receiver, Sender};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    pub struct WebSpeech {
        recognition: JsValue,
        rx: Receiver<SpeechEvent>,
        _handlers: Vec<Closure<dyn FnMut(JsValue)>>,
    }

    impl WebSpeech {
        pub fn new() -> Option<Self> {
            let window = web_sys::window()?;
            let ctor = ["SpeechRecognition", "webkitSpeechRecognition"]
                .iter()
                .find_map(|name| {
                    Reflect::get(&window, &JsValue::from_str(name))
                        .ok()
                        .filter(JsValue::is_function)
                })?;
            let ctor: Function = ctor.dyn_into().ok()?;
            let recognition = Reflect::construct(&ctor, &Array::new()).ok()?;

            set(&recognition, "continuous", &JsValue::TRUE).ok()?;
            set(&recognition, "interimResults", &JsValue::TRUE).ok()?;

            let (tx, rx) = mpsc::channel();
            let handlers = vec![
                handler(&recognition, "onstart", &tx, |_| SpeechEvent::Started)?,
                handler(&recognition, "onend", &tx, |_| SpeechEvent::Ended)?,
                handler(&recognition, "onresult", &tx, |event| {
                    SpeechEvent::Results(read_fragments(&event))
                })?,
                handler(&recognition, "onerror", &tx, |event| {
                    let reason = Reflect::get(&event, &JsValue::from_str("error"))
                        .ok()
                        .and_then(|v| v.as_string())
                        .unwrap_or_else(|| "unknown".into());
                    SpeechEvent::Error(reason)
                })?,
            ];

            Some(Self {
                recognition,
                rx,
                _handlers: handlers,
            })
        }
    }

    impl SpeechCapability for WebSpeech {
        fn is_supported(&self) -> bool {
            true
        }

        fn start(&mut self, locale: &str) -> Result<()> {
            set(&self.recognition, "lang", &JsValue::from_str(locale)).map_err(js_err)?;
            call(&self.recognition, "start").map_err(js_err)
        }

        fn stop(&mut self) {
            if let Err(err) = call(&self.recognition, "stop") {
                log::warn!("speech stop failed: {err:?}");
            }
        }

        fn poll(&mut self) -> Vec<SpeechEvent> {
            self.rx.try_iter().collect()
        }
    }

    fn js_err(err: JsValue) -> StudyError {
        StudyError::Browser(format!("{err:?}"))
    }

    fn set(target: &JsValue, name: &str, value: &JsValue) -> std::result::Result<(), JsValue> {
        Reflect::set(target, &JsValue::from_str(name), value).map(|_| ())
    }

    fn call(target: &JsValue, method: &str) -> std::result::Result<(), JsValue> {
        let function: Function = Reflect::get(target, &JsValue::from_str(method))?.dyn_into()?;
        function.call0(target).map(|_| ())
    }

    fn handler(
        recognition: &JsValue,
        name: &str,
        tx: &Sender<SpeechEvent>,
        to_event: fn(JsValue) -> SpeechEvent,
    ) -> Option<Closure<dyn FnMut(JsValue)>> {
        let tx = tx.clone();
        let closure = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            let _ = tx.send(to_event(event));
        });
        set(recognition, name, closure.as_ref()).ok()?;
        Some(closure)
    }

    fn read_fragments(event: &JsValue) -> Vec<TranscriptFragment> {
        let number = |target: &JsValue, key: &str| {
            Reflect::get(target, &JsValue::from_str(key))
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0) as u32
        };

        // En modo continuo `results` guarda la sesión entera; `resultIndex`
        // solo marca el primero que ha cambiado.
        let Ok(results) = Reflect::get(event, &JsValue::from_str("results")) else {
            return Vec::new();
        };
        let len = number(&results, "length");

        (0..len)
            .filter_map(|i| {
                let result = Reflect::get_u32(&results, i).ok()?;
                let is_final = Reflect::get(&result, &JsValue::from_str("isFinal"))
                    .ok()?
                    .as_bool()
                    .unwrap_or(false);
                let best = Reflect::get_u32(&result, 0).ok()?;
                let text = Reflect::get(&best, &JsValue::from_str("transcript"))
                    .ok()?
                    .as_string()?;
                Some(TranscriptFragment { text, is_final })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(text: &str, is_final: bool) -> TranscriptFragment {
        TranscriptFragment {
            text: text.into(),
            is_final,
        }
    }

    #[test]
    fn appends_after_existing_text_with_a_space() {
        let mut buffer = DictationBuffer::default();
        buffer.begin("Notes:");
        let text = buffer.compose(&[fragment("photosynthesis", true), fragment(" uses", false)]);
        assert_eq!(text, "Notes: photosynthesis uses");
    }

    #[test]
    fn empty_baseline_has_no_leading_space() {
        let buffer = DictationBuffer::default();
        assert_eq!(buffer.compose(&[fragment("hello", false)]), "hello");
    }

    #[test]
    fn finals_come_before_interims() {
        let buffer = DictationBuffer::default();
        let text = buffer.compose(&[
            fragment("maybe ", false),
            fragment("sure ", true),
            fragment("ok", true),
        ]);
        assert_eq!(text, "sure okmaybe ");
    }

    #[test]
    fn empty_results_keep_the_baseline() {
        let mut buffer = DictationBuffer::default();
        buffer.begin("typed");
        assert_eq!(buffer.compose(&[]), "typed");
        assert_eq!(buffer.compose(&[fragment("", true)]), "typed");
    }

    #[test]
    fn commit_moves_the_baseline() {
        let mut buffer = DictationBuffer::default();
        buffer.begin("a");
        let text = buffer.compose(&[fragment("b", true)]);
        buffer.commit(&text);
        assert_eq!(buffer.baseline(), "a b");
        assert_eq!(buffer.compose(&[fragment("c", true)]), "a b c");
    }

    #[test]
    fn later_results_keep_earlier_finals() {
        let mut buffer = DictationBuffer::default();
        buffer.begin("Notes");
        let first = buffer.compose(&[fragment("hello", true)]);
        assert_eq!(first, "Notes hello");
        let second = buffer.compose(&[fragment("hello", true), fragment(" world", true)]);
        assert_eq!(second, "Notes hello world");
    }

    #[test]
    fn unsupported_refuses_to_start() {
        let mut speech = Unsupported;
        assert!(!speech.is_supported());
        assert!(speech.start("en-US").is_err());
        assert!(speech.poll().is_empty());
    }
}
