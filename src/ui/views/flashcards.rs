use crate::StudyApp;
use crate::i18n::Tr;
use crate::ui::helpers::{badge, big_button};
use crate::ui::layout::{centered_panel, two_button_row};
use crate::view_models::card_view;
use egui::{Context, RichText};

pub fn ui_flashcards(app: &mut StudyApp, ctx: &Context) {
    let strings = app.strings.clone();
    let tr = Tr::new(&strings, app.language);
    let card = app
        .study_set
        .as_ref()
        .and_then(|set| card_view(&app.deck, &set.flashcards));

    centered_panel(ctx, 420.0, 620.0, |ui| {
        let panel_width = ui.available_width();
        ui.vertical_centered(|ui| {
            badge(ui, tr.t("flash.badge"));
            ui.heading(RichText::new(tr.t("flash.title")).strong());
            ui.add_space(12.0);

            let Some(card) = card else {
                ui.label(tr.t("flash.empty"));
                return;
            };

            ui.label(format!("{} {}", tr.t("flash.card"), card.counter()));
            ui.add_space(8.0);

            let side = if card.flipped {
                tr.t("flash.insight")
            } else {
                tr.t("flash.question")
            };
            ui.label(RichText::new(side).small().weak());

            // La tarjeta entera es el botón para girarla
            if big_button(ui, &card.text, panel_width, 220.0, true) {
                app.flip_card();
            }
            if !card.flipped {
                ui.label(RichText::new(tr.t("flash.reveal")).small().weak());
            } else {
                ui.label(RichText::new(format!("✔ {}", tr.t("flash.mastered"))).small());
            }

            ui.add_space(8.0);
            let dots: String = (1..=card.total)
                .map(|n| if n == card.number { '●' } else { '○' })
                .collect();
            ui.label(RichText::new(dots).small().weak());

            ui.add_space(8.0);
            let (prev, next) = two_button_row(ui, panel_width, "◀", "▶");
            if prev {
                app.previous_card();
            }
            if next {
                app.next_card();
            }
        });
    });
}
