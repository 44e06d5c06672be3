//! Button handlers. Plain functions over the editor resources so they can be
//! driven from tests without an egui context.

use std::path::Path;

use super::entities::{ParamForm, ResizeDialog, StatusLog};
use crate::collection::HexagonCollection;
use crate::hexagon::Hexagon;
use crate::record::parse_number;
use crate::storage;

/// Appends the hexagon described by the form.
pub fn add_from_form(set: &mut HexagonCollection, form: &ParamForm, log: &mut StatusLog) {
    match form.to_hexagon() {
        Ok(hexagon) => {
            warn_on_commas(&hexagon, log);
            log.info(format!("added {}", hexagon.name));
            set.add(hexagon);
        }
        Err(err) => log.error(format!("cannot add hexagon: {err}")),
    }
}

/// Appends a `_copy` of the selected hexagon.
pub fn copy_selected(set: &mut HexagonCollection, log: &mut StatusLog) {
    let Some(index) = require_selection(set, log, "copy") else {
        return;
    };
    match set.copy(index, None) {
        Ok(()) => log.info("copied selected hexagon"),
        Err(err) => log.error(format!("cannot copy: {err}")),
    }
}

/// Removes the selected hexagon.
pub fn delete_selected(set: &mut HexagonCollection, log: &mut StatusLog) {
    let Some(index) = require_selection(set, log, "delete") else {
        return;
    };
    match set.delete(index) {
        Ok(removed) => log.info(format!("deleted {}", removed.name)),
        Err(err) => log.error(format!("cannot delete: {err}")),
    }
}

/// Opens the resize dialog, pre-filled with the current size.
pub fn open_resize(set: &HexagonCollection, dialog: &mut ResizeDialog, log: &mut StatusLog) {
    if require_selection(set, log, "resize").is_none() {
        return;
    }
    if let Some(hexagon) = set.selected_hexagon() {
        dialog.size = hexagon.size().to_string();
        dialog.open = true;
    }
}

/// Applies the size typed into the resize dialog. The dialog stays open on
/// invalid input so the user can correct it.
pub fn apply_resize(set: &mut HexagonCollection, dialog: &mut ResizeDialog, log: &mut StatusLog) {
    let Some(index) = require_selection(set, log, "resize") else {
        dialog.open = false;
        return;
    };
    let size = match parse_number("size", &dialog.size) {
        Ok(size) => size,
        Err(err) => {
            log.error(format!("cannot resize: {err}"));
            return;
        }
    };
    match set.resize(index, size) {
        Ok(()) => {
            log.info(format!("resized to {size}"));
            dialog.open = false;
        }
        Err(err) => log.error(format!("cannot resize: {err}")),
    }
}

/// Overwrites the selected hexagon with the form fields, all at once.
pub fn apply_form(set: &mut HexagonCollection, form: &ParamForm, log: &mut StatusLog) {
    let Some(index) = require_selection(set, log, "change") else {
        return;
    };
    let hexagon = match form.to_hexagon() {
        Ok(hexagon) => hexagon,
        Err(err) => {
            log.error(format!("cannot apply changes: {err}"));
            return;
        }
    };
    warn_on_commas(&hexagon, log);
    let result = set.replace_fields(
        index,
        hexagon.center_x,
        hexagon.center_y,
        hexagon.size(),
        &hexagon.color,
        &hexagon.name,
    );
    match result {
        Ok(()) => log.info(format!("updated {}", hexagon.name)),
        Err(err) => log.error(format!("cannot apply changes: {err}")),
    }
}

/// Selects `index` (or clears the selection) and shows the hexagon in the form.
pub fn select(
    set: &mut HexagonCollection,
    form: &mut ParamForm,
    index: Option<usize>,
    log: &mut StatusLog,
) {
    if let Err(err) = set.select(index) {
        log.warn(format!("cannot select: {err}"));
        return;
    }
    if let Some(hexagon) = index.and_then(|i| set.get(i)) {
        form.fill_from(hexagon);
    }
}

/// Saves to the form's file path, appending `.csv` when it has no extension.
pub fn save(set: &HexagonCollection, form: &mut ParamForm, log: &mut StatusLog) {
    let path = storage::with_default_extension(Path::new(form.file_path.trim()));
    match storage::save(set, &path) {
        Ok(()) => {
            log.info(format!("saved {} hexagons to {}", set.len(), path.display()));
            form.file_path = path.display().to_string();
        }
        Err(err) => log.error(format!("save failed: {err}")),
    }
}

/// Loads from `path`, surfacing each skipped line as a warning.
pub fn load(set: &mut HexagonCollection, path: &Path, log: &mut StatusLog) {
    match storage::load(set, path) {
        Ok(report) => {
            for warning in &report.warnings {
                log.warn(warning.to_string());
            }
            log.info(format!(
                "loaded {} hexagons from {}",
                report.accepted,
                path.display()
            ));
        }
        Err(err) => log.error(format!("load failed: {err}")),
    }
}

fn require_selection(set: &HexagonCollection, log: &mut StatusLog, verb: &str) -> Option<usize> {
    let selected = set.selected();
    if selected.is_none() {
        log.warn(format!("select a hexagon to {verb} first"));
    }
    selected
}

/// The file format has no escaping; such a hexagon cannot be saved faithfully.
fn warn_on_commas(hexagon: &Hexagon, log: &mut StatusLog) {
    if hexagon.name.contains(',') || hexagon.color.contains(',') {
        log.warn("names and colors containing commas will not load back from a saved file");
    }
}
