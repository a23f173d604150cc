mod helpers;
pub mod layout;
pub mod views;

use crate::app::StudyApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl App for StudyApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Resultados de red, lectura de archivos y voz llegan por canal
        if self.poll_background() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        if self.state == AppState::Upload && !self.loading {
            views::upload::handle_dropped_files(self, ctx);
        }

        top_panel(self, ctx);
        bottom_panel(self, ctx);

        if self.loading {
            views::loading::ui_loading(self, ctx);
            return;
        }

        // Dispatch por estado
        match self.state {
            AppState::Upload => views::upload::ui_upload(self, ctx),
            AppState::Summary => views::summary::ui_summary(self, ctx),
            AppState::Flashcards => views::flashcards::ui_flashcards(self, ctx),
            AppState::Mcqs => views::quiz::ui_quiz(self, ctx),
        }
    }
}
