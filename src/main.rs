#![warn(missing_docs)]
//! Hexagon editor.
//!
//! Create, copy, resize, delete, save, and load regular hexagons. The
//! collection model lives in plain modules (`hexagon`, `collection`, `record`,
//! `storage`); the `editor` and `canvas` plugins are the egui front end.

mod canvas;
mod collection;
mod editor;
mod error;
mod hexagon;
pub mod math;
mod record;
mod storage;

use bevy::app::AppExit;
use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;
use bevy_inspector_egui::quick::WorldInspectorPlugin;

/// Application-wide editor state, used for system scheduling.
#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash, Reflect)]
pub enum EditorState {
    /// Normal editing through the panels and canvas.
    #[default]
    Editing,
    /// World inspector overlay active (F12 to toggle).
    Inspecting,
}

/// Ordering of the egui passes: side and top/bottom panels must claim their
/// space before the central canvas panel fills the rest.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum UiSet {
    /// Toolbar, parameter panel, status bar, dialogs.
    Panels,
    /// Central canvas.
    Canvas,
}

/// Command line options.
#[cfg(feature = "native")]
#[derive(clap::Parser, Debug)]
#[command(version, about = "Editor for collections of regular hexagons")]
struct Args {
    /// Hexagon file (`.csv` or `.txt`) to open at startup.
    #[arg(short, long)]
    file: Option<std::path::PathBuf>,
    /// Start with an empty collection instead of one default hexagon.
    #[arg(long)]
    no_seed: bool,
}

#[cfg(feature = "native")]
impl Args {
    fn apply(self, cfg: &mut editor::EditorConfig) {
        if let Some(file) = self.file {
            cfg.startup_file = Some(file);
        }
        cfg.seed_default = !self.no_seed;
    }
}

fn main() {
    #[allow(unused_mut)]
    let mut editor_cfg = editor::EditorConfig::default();
    #[cfg(feature = "native")]
    <Args as clap::Parser>::parse().apply(&mut editor_cfg);

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Hexagon Editor".into(),
            ..default()
        }),
        ..default()
    }))
    .register_type::<EditorState>()
    .init_state::<EditorState>()
    .add_plugins(bevy_egui::EguiPlugin::default())
    .configure_sets(
        EguiPrimaryContextPass,
        (UiSet::Panels, UiSet::Canvas).chain(),
    )
    .add_plugins(editor::EditorPlugin(editor_cfg))
    .add_plugins(canvas::CanvasPlugin(canvas::CanvasConfig::default()))
    .add_systems(Update, exit_on_ctrl_q)
    .add_systems(Update, toggle_inspector)
    .add_plugins(WorldInspectorPlugin::new().run_if(in_state(EditorState::Inspecting)));

    app.run();
}

fn toggle_inspector(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<EditorState>>,
    mut next: ResMut<NextState<EditorState>>,
) {
    if keys.just_pressed(KeyCode::F12) {
        next.set(match state.get() {
            EditorState::Editing => EditorState::Inspecting,
            EditorState::Inspecting => EditorState::Editing,
        });
    }
}

fn exit_on_ctrl_q(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    let ctrl = keys.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]);
    if ctrl && keys.just_pressed(KeyCode::KeyQ) {
        exit.write(AppExit::Success);
    }
}
