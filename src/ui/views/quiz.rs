use crate::StudyApp;
use crate::i18n::Tr;
use crate::quiz::QuizOutcome;
use crate::ui::helpers::{EMERALD, ROSE, badge, big_button, option_button};
use crate::ui::layout::{centered_panel, scroll_panel, two_button_row};
use crate::view_models::{QuestionView, question_view};
use egui::{Context, ProgressBar, RichText, Ui};

pub fn ui_quiz(app: &mut StudyApp, ctx: &Context) {
    let strings = app.strings.clone();
    let tr = Tr::new(&strings, app.language);
    let Some(set) = app.study_set.as_ref() else {
        return;
    };

    if set.mcqs.is_empty() {
        centered_panel(ctx, 120.0, 480.0, |ui| {
            ui.vertical_centered(|ui| ui.label(tr.t("quiz.empty")));
        });
        return;
    }

    if let Some(outcome) = app.quiz.outcome(&set.mcqs) {
        ui_results(app, ctx, tr, &outcome);
        return;
    }

    let Some(view) = question_view(&app.quiz, &set.mcqs) else {
        return;
    };
    let score = app.quiz.score();

    scroll_panel(ctx, "quiz_scroll", 680.0, |ui| {
        ui_question(app, ui, tr, &view, score);
    });
}

fn ui_question(app: &mut StudyApp, ui: &mut Ui, tr: Tr, view: &QuestionView, score: usize) {
    let panel_width = ui.available_width();

    ui.horizontal(|ui| {
        badge(ui, tr.t("quiz.challenge"));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(format!("{}: {score}", tr.t("quiz.score"))).strong());
        });
    });
    ui.add(ProgressBar::new(view.progress()).text(format!("{} / {}", view.number, view.total)));
    ui.add_space(12.0);

    ui.label(RichText::new(&view.question).strong().size(20.0));
    ui.add_space(12.0);

    for option in &view.options {
        if option_button(
            ui,
            option.letter,
            &option.text,
            option.state,
            panel_width,
            !view.revealed,
        ) {
            app.select_option(option.index);
        }
        ui.add_space(4.0);
    }

    if !view.revealed {
        return;
    }

    ui.add_space(12.0);
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(panel_width - 16.0);
        badge(ui, tr.t("quiz.insight"));
        if view.answered_correctly {
            ui.label(RichText::new(tr.t("quiz.correct")).strong().color(EMERALD));
        } else {
            ui.label(RichText::new(tr.t("quiz.incorrect")).strong().color(ROSE));
            if let Some(correct) = &view.correct_text {
                ui.label(format!("{} {correct}", tr.t("quiz.correct_answer")));
            }
        }
        ui.add_space(4.0);
        ui.label(&view.explanation);
    });

    ui.add_space(12.0);
    let next_label = if view.is_last {
        tr.t("quiz.complete")
    } else {
        tr.t("quiz.next")
    };
    if big_button(ui, next_label, panel_width, 44.0, true) {
        app.next_question();
    }
}

fn ui_results(app: &mut StudyApp, ctx: &Context, tr: Tr, outcome: &QuizOutcome) {
    centered_panel(ctx, 380.0, 520.0, |ui| {
        let panel_width = ui.available_width();
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new(tr.t(outcome.headline_key())).strong().size(26.0));
            ui.add_space(12.0);

            ui.label(RichText::new(tr.t("quiz.final_score")).small().weak());
            ui.label(
                RichText::new(format!("{} / {}", outcome.score, outcome.total))
                    .strong()
                    .size(40.0),
            );
            ui.add_space(8.0);

            ui.label(format!(
                "{}: {}",
                tr.t("quiz.rank"),
                tr.t(outcome.rank.label_key())
            ));
            ui.label(format!("{}: {}%", tr.t("quiz.accuracy"), outcome.percent));
            ui.label(format!("{}: {}", tr.t("quiz.grade"), outcome.letter.as_str()));
            ui.add_space(16.0);

            let (retry, finish) =
                two_button_row(ui, panel_width, tr.t("quiz.retry"), tr.t("quiz.finish"));
            if retry {
                app.retry_quiz();
            }
            if finish {
                app.reset();
            }
        });
    });
}
