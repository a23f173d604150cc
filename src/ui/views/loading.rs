use crate::StudyApp;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText, Spinner};

pub fn ui_loading(app: &StudyApp, ctx: &Context) {
    let tr = app.tr();
    centered_panel(ctx, 200.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add(Spinner::new().size(56.0));
            ui.add_space(16.0);
            ui.heading(RichText::new(tr.t("loading.title")).strong());
            ui.add_space(6.0);
            ui.label(RichText::new(tr.t("loading.body")).weak());
        });
    });
}
