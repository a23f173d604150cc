use super::*;

impl StudyApp {
    /// Cambia de pestaña. Las vistas de estudio necesitan un `StudySet`;
    /// a la subida solo se vuelve con `reset`.
    pub fn show(&mut self, target: AppState) {
        if self.loading || target == self.state {
            return;
        }
        if !target.needs_study_set() || self.study_set.is_none() {
            log::debug!("ignoring navigation to {target:?}");
            return;
        }
        self.state = target;
    }

    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            log::info!("interface language set to {}", language.code());
            self.language = language;
        }
    }
}
