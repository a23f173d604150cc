use crate::StudyApp;
use crate::i18n::Tr;
use crate::ui::helpers::badge;
use crate::ui::layout::scroll_panel;
use egui::{Context, RichText};
use egui_commonmark::CommonMarkViewer;

pub fn ui_summary(app: &mut StudyApp, ctx: &Context) {
    let strings = app.strings.clone();
    let tr = Tr::new(&strings, app.language);
    let Some(set) = app.study_set.as_ref() else {
        return;
    };
    let cm_cache = &mut app.cm_cache;

    scroll_panel(ctx, "summary_scroll", 760.0, |ui| {
        badge(ui, tr.t("summary.badge"));
        ui.add_space(4.0);
        ui.heading(RichText::new(&set.title).strong().size(28.0));
        ui.separator();
        ui.add_space(8.0);

        for paragraph in set.summary_paragraphs() {
            CommonMarkViewer::new().show(ui, cm_cache, paragraph);
            ui.add_space(10.0);
        }

        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(tr.t("summary.footer")).small().weak());
        });
    });
}
