use std::path::PathBuf;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::actions;
use super::entities::{EditorRes, SelectHexagon, StatusLevel, StatusLog};

/// A button press, collected while drawing and applied afterwards so the egui
/// closures only ever borrow the form.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Action {
    Add,
    Copy,
    Delete,
    OpenResize,
    Apply,
    Save,
    Load,
}

fn run(action: Action, res: &mut EditorRes) {
    let EditorRes {
        set,
        form,
        dialog,
        log,
        ..
    } = res;
    match action {
        Action::Add => actions::add_from_form(set, form, log),
        Action::Copy => actions::copy_selected(set, log),
        Action::Delete => actions::delete_selected(set, log),
        Action::OpenResize => actions::open_resize(set, dialog, log),
        Action::Apply => actions::apply_form(set, form, log),
        Action::Save => actions::save(set, form, log),
        Action::Load => {
            let path = PathBuf::from(form.file_path.trim());
            actions::load(set, &path, log);
        }
    }
}

// ── Startup ────────────────────────────────────────────────────────

/// Loads the startup file if one is configured, otherwise seeds the default hexagon.
pub fn populate_collection(mut res: EditorRes) {
    if let Some(path) = res.cfg.startup_file.clone() {
        actions::load(&mut res.set, &path, &mut res.log);
        res.form.file_path = path.display().to_string();
    } else if res.cfg.seed_default {
        res.set.add(res.cfg.form_defaults.clone());
    }
}

// ── Update ─────────────────────────────────────────────────────────

/// Applies [`SelectHexagon`] requests from the list and the canvas.
pub fn apply_selection(mut requests: MessageReader<SelectHexagon>, mut res: EditorRes) {
    for SelectHexagon(index) in requests.read().copied() {
        actions::select(&mut res.set, &mut res.form, index, &mut res.log);
    }
}

// ── Panels ─────────────────────────────────────────────────────────

/// Add / Copy / Delete / Resize buttons along the top edge.
pub fn toolbar(mut contexts: EguiContexts, mut res: EditorRes) -> Result {
    let ctx = contexts.ctx_mut()?;
    let mut action = None;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            for (label, pressed) in [
                ("Add", Action::Add),
                ("Copy", Action::Copy),
                ("Delete", Action::Delete),
                ("Resize", Action::OpenResize),
            ] {
                if ui.button(label).clicked() {
                    action = Some(pressed);
                }
            }
        });
    });

    if let Some(action) = action {
        run(action, &mut res);
    }
    Ok(())
}

/// Most recent status messages, newest at the bottom.
pub fn status_panel(mut contexts: EguiContexts, log: Res<StatusLog>) -> Result {
    const VISIBLE: usize = 4;
    let ctx = contexts.ctx_mut()?;

    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        let recent: Vec<_> = log.entries().rev().take(VISIBLE).collect();
        if recent.is_empty() {
            ui.weak("Ready");
        }
        for entry in recent.into_iter().rev() {
            let color = match entry.level {
                StatusLevel::Info => ui.visuals().text_color(),
                StatusLevel::Warning => egui::Color32::YELLOW,
                StatusLevel::Error => egui::Color32::LIGHT_RED,
            };
            ui.colored_label(color, entry.text.as_str());
        }
    });
    Ok(())
}

/// Parameter form, hexagon list, and the file row.
pub fn side_panel(
    mut contexts: EguiContexts,
    mut res: EditorRes,
    mut select: MessageWriter<SelectHexagon>,
) -> Result {
    let ctx = contexts.ctx_mut()?;
    let mut action = None;
    let EditorRes { set, form, cfg, .. } = &mut res;
    let form = &mut **form;

    egui::SidePanel::left("parameters")
        .default_width(cfg.panel_width)
        .show(ctx, |ui| {
            ui.heading("Parameters");
            egui::Grid::new("parameter_grid")
                .num_columns(2)
                .show(ui, |ui| {
                    for (label, text) in [
                        ("X:", &mut form.x),
                        ("Y:", &mut form.y),
                        ("Size:", &mut form.size),
                    ] {
                        ui.label(label);
                        ui.text_edit_singleline(text);
                        ui.end_row();
                    }

                    ui.label("Color:");
                    ui.horizontal(|ui| {
                        ui.add(egui::TextEdit::singleline(&mut form.color).desired_width(80.0));
                        egui::ComboBox::from_id_salt("palette")
                            .selected_text("")
                            .width(24.0)
                            .show_ui(ui, |ui| {
                                for token in &cfg.palette {
                                    ui.selectable_value(
                                        &mut form.color,
                                        token.clone(),
                                        token.as_str(),
                                    );
                                }
                            });
                    });
                    ui.end_row();

                    ui.label("Name:");
                    ui.text_edit_singleline(&mut form.name);
                    ui.end_row();
                });
            if ui.button("Apply").clicked() {
                action = Some(Action::Apply);
            }

            ui.separator();
            ui.heading("Hexagons");
            egui::ScrollArea::vertical()
                .max_height(ui.available_height() - 80.0)
                .show(ui, |ui| {
                    if set.is_empty() {
                        ui.weak("(none)");
                    }
                    for (index, hexagon) in set.iter().enumerate() {
                        let selected = set.selected() == Some(index);
                        if ui.selectable_label(selected, hexagon.label()).clicked() {
                            select.write(SelectHexagon(Some(index)));
                        }
                    }
                });

            ui.separator();
            ui.label("File:");
            ui.text_edit_singleline(&mut form.file_path);
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    action = Some(Action::Save);
                }
                if ui.button("Load").clicked() {
                    action = Some(Action::Load);
                }
            });
        });

    if let Some(action) = action {
        run(action, &mut res);
    }
    Ok(())
}

/// The "new size" dialog opened by the Resize button.
pub fn resize_window(mut contexts: EguiContexts, mut res: EditorRes) -> Result {
    if !res.dialog.open {
        return Ok(());
    }
    let ctx = contexts.ctx_mut()?;
    let mut open = true;
    let mut apply = false;

    egui::Window::new("Resize")
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.label("New size:");
            let field = ui.text_edit_singleline(&mut res.dialog.size);
            let entered = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Apply").clicked() || entered {
                apply = true;
            }
        });

    if !open {
        res.dialog.open = false;
    } else if apply {
        let EditorRes {
            set, dialog, log, ..
        } = &mut res;
        actions::apply_resize(set, dialog, log);
    }
    Ok(())
}
