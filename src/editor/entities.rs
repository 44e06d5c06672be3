use std::collections::VecDeque;

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::EditorConfig;
use crate::collection::HexagonCollection;
use crate::error::RecordError;
use crate::hexagon::Hexagon;
use crate::record::parse_number;

/// The hexagons being edited. The only owner of the collection.
///
/// Not reflected, so the inspector cannot bypass the collection's checks.
#[derive(Resource, Default, Deref, DerefMut)]
pub struct HexagonSet(pub HexagonCollection);

/// Request to change the selection, written by the list and the canvas.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct SelectHexagon(pub Option<usize>);

/// Raw text of the parameter form and the file path field.
///
/// Kept as strings so half-typed numbers survive between frames; parsed only
/// when a button is pressed.
#[derive(Resource, Clone, Debug, Default, PartialEq, Reflect)]
pub struct ParamForm {
    /// Center x.
    pub x: String,
    /// Center y.
    pub y: String,
    /// Circumradius.
    pub size: String,
    /// Color token.
    pub color: String,
    /// Display name.
    pub name: String,
    /// Target of Save and source of Load.
    pub file_path: String,
}

impl ParamForm {
    /// Form pre-filled from the configured defaults.
    pub fn new(cfg: &EditorConfig) -> Self {
        let mut form = Self {
            file_path: cfg.file_path.clone(),
            ..default()
        };
        form.fill_from(&cfg.form_defaults);
        form
    }

    /// Copies all five fields of `hexagon` into the form.
    pub fn fill_from(&mut self, hexagon: &Hexagon) {
        self.x = hexagon.center_x.to_string();
        self.y = hexagon.center_y.to_string();
        self.size = hexagon.size().to_string();
        self.color.clone_from(&hexagon.color);
        self.name.clone_from(&hexagon.name);
    }

    /// Parses the form into a hexagon, with the same rules as a file record.
    pub fn to_hexagon(&self) -> Result<Hexagon, RecordError> {
        let x = parse_number("x", &self.x)?;
        let y = parse_number("y", &self.y)?;
        let size = parse_number("size", &self.size)?;
        Hexagon::new(x, y, size, self.color.trim(), self.name.trim())
            .map_err(|_| RecordError::NonPositiveSize(size))
    }
}

/// State of the modal "new size" dialog.
#[derive(Resource, Default)]
pub struct ResizeDialog {
    /// Whether the dialog window is shown.
    pub open: bool,
    /// Text of the size field.
    pub size: String,
}

/// Severity of a [`StatusLog`] entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Completed action.
    Info,
    /// Skipped record line or refused action; nothing was lost.
    Warning,
    /// Load or save aborted, or invalid input.
    Error,
}

/// One user-visible message.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusEntry {
    /// Severity.
    pub level: StatusLevel,
    /// Message text.
    pub text: String,
}

/// Bounded, newest-last list of messages shown in the status panel.
///
/// Every push is mirrored to the log at a matching level.
#[derive(Resource, Debug)]
pub struct StatusLog {
    entries: VecDeque<StatusEntry>,
    capacity: usize,
}

impl StatusLog {
    /// Empty log keeping at most `capacity` entries (at least one).
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Records a completed action.
    pub fn info(&mut self, text: impl Into<String>) {
        let text = text.into();
        info!("{text}");
        self.push(StatusLevel::Info, text);
    }

    /// Records a non-fatal problem.
    pub fn warn(&mut self, text: impl Into<String>) {
        let text = text.into();
        warn!("{text}");
        self.push(StatusLevel::Warning, text);
    }

    /// Records a failed action.
    pub fn error(&mut self, text: impl Into<String>) {
        let text = text.into();
        error!("{text}");
        self.push(StatusLevel::Error, text);
    }

    /// Entries, oldest first.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &StatusEntry> {
        self.entries.iter()
    }

    fn push(&mut self, level: StatusLevel, text: String) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(StatusEntry { level, text });
    }
}

/// Bundled editor resources shared by the panel systems.
#[derive(SystemParam)]
pub struct EditorRes<'w> {
    /// The collection.
    pub set: ResMut<'w, HexagonSet>,
    /// Form text.
    pub form: ResMut<'w, ParamForm>,
    /// Resize dialog state.
    pub dialog: ResMut<'w, ResizeDialog>,
    /// Status messages.
    pub log: ResMut<'w, StatusLog>,
    /// Editor configuration.
    pub cfg: Res<'w, EditorConfig>,
}
