//! Hexagon editor panels: parameter form, hexagon list, file row, status log.
//!
//! Owns the single [`HexagonSet`] resource. Every button maps to one call into
//! [`crate::collection::HexagonCollection`] through the helpers in `actions`;
//! failures end up in the [`StatusLog`] instead of interrupting the user.

mod actions;
mod entities;
mod systems;

pub use entities::{HexagonSet, SelectHexagon};

use std::path::PathBuf;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::UiSet;
use crate::hexagon::Hexagon;

/// Per-plugin configuration for the editor panels.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct EditorConfig {
    /// Values the parameter form starts with. Hidden from reflection so the
    /// inspector cannot store a non-positive size.
    #[reflect(ignore)]
    pub form_defaults: Hexagon,
    /// Color tokens offered by the color picker. Any other token may be typed.
    pub palette: Vec<String>,
    /// Initial contents of the file path field.
    pub file_path: String,
    /// File loaded at startup instead of seeding the default hexagon.
    pub startup_file: Option<PathBuf>,
    /// Whether to start with one default hexagon when no file is loaded.
    pub seed_default: bool,
    /// Maximum number of messages kept in the status log.
    pub status_capacity: usize,
    /// Width of the left-hand parameter panel in logical pixels.
    pub panel_width: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            form_defaults: Hexagon::default(),
            palette: ["blue", "red", "green", "yellow", "purple", "orange", "pink"]
                .into_iter()
                .map(String::from)
                .collect(),
            file_path: "hexagons.csv".into(),
            startup_file: None,
            seed_default: true,
            status_capacity: 50,
            panel_width: 240.0,
        }
    }
}

/// Editor panels, the hexagon collection, and selection handling.
pub struct EditorPlugin(pub EditorConfig);

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<EditorConfig>()
            .register_type::<entities::ParamForm>()
            .insert_resource(self.0.clone())
            .insert_resource(entities::ParamForm::new(&self.0))
            .insert_resource(entities::StatusLog::new(self.0.status_capacity))
            .init_resource::<HexagonSet>()
            .init_resource::<entities::ResizeDialog>()
            .add_message::<SelectHexagon>()
            .add_systems(Startup, systems::populate_collection)
            .add_systems(Update, systems::apply_selection)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    systems::toolbar,
                    systems::status_panel,
                    systems::side_panel,
                    systems::resize_window,
                )
                    .chain()
                    .in_set(UiSet::Panels),
            );
    }
}
