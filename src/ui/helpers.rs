// src/ui/helpers.rs
use crate::view_models::OptionState;
use egui::{Button, Color32, RichText, Ui, Vec2};

pub const EMERALD: Color32 = Color32::from_rgb(16, 185, 129);
pub const ROSE: Color32 = Color32::from_rgb(244, 63, 94);
pub const INDIGO: Color32 = Color32::from_rgb(79, 70, 229);

pub fn big_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(
        enabled,
        Button::new(RichText::new(label).strong()).min_size(Vec2::new(width, height)),
    )
    .clicked()
}

/// Etiqueta pequeña en mayúsculas encima de cada sección.
pub fn badge(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text.to_uppercase()).small().strong().color(INDIGO));
}

pub fn option_fill(state: OptionState) -> Option<Color32> {
    match state {
        OptionState::Correct => Some(EMERALD.gamma_multiply(0.35)),
        OptionState::WrongSelected => Some(ROSE.gamma_multiply(0.35)),
        OptionState::Neutral | OptionState::Dimmed => None,
    }
}

/// Fila de opción del test. Solo es pulsable mientras no haya respuesta.
pub fn option_button(
    ui: &mut Ui,
    letter: char,
    text: &str,
    state: OptionState,
    width: f32,
    enabled: bool,
) -> bool {
    let mut label = RichText::new(format!("{letter}.  {text}"));
    if state == OptionState::Dimmed {
        label = label.weak();
    }

    let mut button = Button::new(label).min_size(Vec2::new(width, 44.0)).wrap();
    if let Some(fill) = option_fill(state) {
        button = button.fill(fill);
    }
    ui.add_enabled(enabled, button).clicked()
}
