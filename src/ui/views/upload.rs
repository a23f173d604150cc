use crate::StudyApp;
use crate::i18n::Tr;
use crate::ingest::{InputMode, MAX_QUESTIONS, MIN_QUESTIONS};
use crate::ui::helpers::{EMERALD, ROSE, badge, big_button};
use crate::ui::layout::scroll_panel;
use egui::{Context, RichText, Slider, TextEdit, Ui};

/// Archivos soltados sobre la ventana: solo se usa el primero.
pub fn handle_dropped_files(app: &mut StudyApp, ctx: &Context) {
    let dropped = ctx.input(|i| i.raw.dropped_files.clone());
    let Some(file) = dropped.into_iter().next() else {
        return;
    };

    match (file.bytes, file.path) {
        (Some(bytes), _) => app.load_file(file.name, file.mime, bytes.to_vec()),
        #[cfg(not(target_arch = "wasm32"))]
        (None, Some(path)) => app.load_path(&path),
        _ => log::warn!("dropped file {:?} has no readable content", file.name),
    }
}

pub fn ui_upload(app: &mut StudyApp, ctx: &Context) {
    let strings = app.strings.clone();
    let tr = Tr::new(&strings, app.language);

    scroll_panel(ctx, "upload_scroll", 820.0, |ui| {
        ui.vertical_centered(|ui| {
            badge(ui, tr.t("upload.badge"));
            ui.heading(
                RichText::new(format!(
                    "{} {}",
                    tr.t("upload.headline_1"),
                    tr.t("upload.headline_2")
                ))
                .strong()
                .size(30.0),
            );
        });
        ui.add_space(12.0);

        if let Some(error) = &app.error {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.label(RichText::new(tr.t("error.title")).strong().color(ROSE));
                ui.label(error);
            });
            ui.add_space(8.0);
        }

        ui.horizontal(|ui| {
            let mode = &mut app.upload.mode;
            ui.selectable_value(mode, InputMode::Upload, tr.t("upload.mode_upload"));
            ui.selectable_value(mode, InputMode::Search, tr.t("upload.mode_search"));
        });
        ui.separator();

        match app.upload.mode {
            InputMode::Upload => ui_upload_mode(app, ui, tr),
            InputMode::Search => ui_search_mode(app, ui, tr),
        }
    });
}

fn ui_upload_mode(app: &mut StudyApp, ui: &mut Ui, tr: Tr) {
    let panel_width = ui.available_width();
    let has_images = !app.upload.images.is_empty();

    ui.horizontal(|ui| {
        let title = if has_images {
            tr.t("upload.visual_insights")
        } else {
            tr.t("upload.knowledge_input")
        };
        badge(ui, title);

        if app.upload.is_listening {
            ui.label(RichText::new(format!("● {}", tr.t("upload.listening"))).color(ROSE));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if app.can_dictate() {
                let label = if app.upload.is_listening {
                    tr.t("upload.mic_stop")
                } else {
                    tr.t("upload.mic_start")
                };
                if ui.button(label).clicked() {
                    app.toggle_dictation();
                }
            }
        });
    });

    // Con imágenes cargadas el texto es solo una etiqueta
    let response = ui.add(
        TextEdit::multiline(&mut app.upload.text)
            .hint_text(tr.t("upload.placeholder"))
            .desired_rows(10)
            .desired_width(f32::INFINITY)
            .interactive(!has_images && !app.upload.is_parsing),
    );
    if response.changed() {
        app.text_edited();
    }
    ui.label(
        RichText::new(format!("{} {}", app.upload.text_chars(), tr.t("upload.chars")))
            .small()
            .weak(),
    );
    ui.add_space(10.0);

    ui_file_box(app, ui, tr);
    ui.add_space(10.0);

    ui.horizontal(|ui| {
        ui.label(RichText::new(tr.t("upload.study_level")).strong());
        ui.label(RichText::new(tr.t("upload.light")).small().weak());
        let mut count = app.upload.question_count;
        let slider = ui.add(
            Slider::new(&mut count, MIN_QUESTIONS..=MAX_QUESTIONS).suffix(format!(
                " {}",
                tr.t("upload.items")
            )),
        );
        if slider.changed() {
            app.set_question_count(count);
        }
        ui.label(RichText::new(tr.t("upload.intense")).small().weak());
    });
    ui.add_space(10.0);

    ui.horizontal(|ui| {
        for key in [
            "upload.feature_summary",
            "upload.feature_flashcards",
            "upload.feature_quiz",
        ] {
            ui.label(RichText::new(format!("✔ {}", tr.t(key))).color(EMERALD));
        }
    });
    ui.add_space(14.0);

    let can_submit = app.upload.can_submit();
    if big_button(ui, tr.t("upload.start"), panel_width, 48.0, can_submit) {
        app.submit_upload();
    }
    if !can_submit && !app.upload.is_parsing {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(tr.t("upload.min_chars")).small().weak());
        });
    }
}

fn ui_file_box(app: &mut StudyApp, ui: &mut Ui, tr: Tr) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            if app.upload.is_parsing {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(tr.t("upload.analyzing"));
                });
            } else if let Some(name) = &app.upload.file_name {
                ui.label(RichText::new(format!("📄 {name}")).strong());
                if !app.upload.images.is_empty() {
                    ui.label(format!("🖼 {}", app.upload.images.len()));
                }
            } else {
                ui.label(RichText::new(format!("⬇ {}", tr.t("upload.drop_files"))).strong());
                ui.label(RichText::new(tr.t("upload.drop_hint")).small().weak());
            }
        });

        #[cfg(not(target_arch = "wasm32"))]
        ui.horizontal(|ui| {
            ui.add(
                TextEdit::singleline(&mut app.upload.path_input)
                    .hint_text(tr.t("upload.path_hint"))
                    .desired_width(ui.available_width() - 140.0),
            );
            let path = app.upload.path_input.trim().to_string();
            if ui
                .add_enabled(
                    !path.is_empty() && !app.upload.is_parsing,
                    egui::Button::new(tr.t("upload.browse")),
                )
                .clicked()
            {
                app.load_path(std::path::Path::new(&path));
            }
        });
    });
}

fn ui_search_mode(app: &mut StudyApp, ui: &mut Ui, tr: Tr) {
    badge(ui, tr.t("search.library"));
    ui.label(RichText::new(tr.t("search.library_hint")).weak());
    ui.add_space(8.0);

    let mut submit = false;
    ui.horizontal(|ui| {
        let response = ui.add(
            TextEdit::singleline(&mut app.upload.search_query)
                .hint_text(tr.t("search.placeholder"))
                .desired_width(ui.available_width() - 110.0),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }
        let enabled = !app.upload.is_searching && !app.upload.search_query.trim().is_empty();
        if ui
            .add_enabled(enabled, egui::Button::new(tr.t("search.button")))
            .clicked()
        {
            submit = true;
        }
        if app.upload.is_searching {
            ui.spinner();
        }
    });
    if submit {
        app.start_search();
    }
    ui.add_space(10.0);

    let mut study = None;
    for (index, source) in app.upload.search_results.iter().enumerate() {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(&source.title).strong());
            if !source.snippet.is_empty() {
                ui.label(RichText::new(&source.snippet).small().weak());
            }
            ui.horizontal(|ui| {
                if ui.button(tr.t("search.study_now")).clicked() {
                    study = Some(index);
                }
                ui.hyperlink_to(tr.t("search.open"), &source.uri);
            });
        });
        ui.add_space(6.0);
    }
    if let Some(index) = study {
        app.study_source(index);
    }
}
