use crate::i18n::Tr;
use crate::model::{AppState, Language};
use crate::StudyApp;
use egui::{Button, CentralPanel, Context, Frame, RichText, ScrollArea, Ui, Visuals};

pub fn top_panel(app: &mut StudyApp, ctx: &Context) {
    let strings = app.strings.clone();
    let tr = Tr::new(&strings, app.language);

    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.label(RichText::new(tr.t("nav.brand")).strong().size(18.0));
            ui.label(RichText::new(tr.t("nav.tagline")).small().weak());
            ui.separator();

            // Pestañas solo con material generado
            if app.study_set.is_some() && !app.loading {
                for (target, key) in [
                    (AppState::Summary, "nav.summary"),
                    (AppState::Flashcards, "nav.flashcards"),
                    (AppState::Mcqs, "nav.quizzes"),
                ] {
                    if ui.selectable_label(app.state == target, tr.t(key)).clicked() {
                        app.show(target);
                    }
                }
                ui.separator();
                if ui.button(format!("⟲ {}", tr.t("nav.new_study"))).clicked() {
                    app.reset();
                }
            } else {
                ui.label(tr.t("nav.ready"));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                for language in Language::ALL.iter().rev() {
                    if ui
                        .selectable_label(app.language == *language, language.toggle_label())
                        .clicked()
                    {
                        app.set_language(*language);
                        ctx.request_repaint();
                    }
                }
            });
        });
    });
}

pub fn bottom_panel(app: &StudyApp, ctx: &Context) {
    let tr = app.tr();
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(tr.t("footer.motto")).small().weak());

            // ----------- BOTONES DE TEMA -----------
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(tr.t("theme.dark")).clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button(tr.t("theme.light")).clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            });
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Panel con scroll vertical y ancho máximo, para vistas largas.
pub fn scroll_panel(ctx: &Context, id: &str, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical()
            .id_salt(id)
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    Frame::default()
                        .fill(ui.visuals().window_fill())
                        .inner_margin(egui::Margin::symmetric(16, 16))
                        .show(ui, |ui| {
                            let w = ui.available_width().min(max_width);
                            ui.set_width(w);
                            inner(ui);
                        });
                });
            });
    });
}

/// Dibuja dos botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        // espacio para centrar la fila en su panel
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        clicked_left = ui
            .add_sized([btn_w, 36.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_sized([btn_w, 36.0], Button::new(right_label))
            .clicked();
    });
    (clicked_left, clicked_right)
}
