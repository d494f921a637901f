//! 3D Graph Visualization Module
//!
//! Renders the dataset as glowing polyhedra joined by curves, with hover and
//! click picking, camera framing on selection and a 2D detail overlay.
//!
//! ## Module Structure
//!
//! - `components` - ECS components for nodes, curves, labels and overlay
//! - `events` - Hover and selection change events
//! - `resources` - ECS resources (interaction state, camera rig, overlay)
//! - `systems` - ECS systems (camera, interaction, node, UI)
//! - `geometry` - Polyhedron and line meshes
//! - `connection` - Bézier curves for edges
//! - `overlay` - Header, detail panel, hint and loading cover
//! - `setup` - Scene initialization
//! - `plugin` - Bevy plugin definitions
//! - `constants` - Colors, sizes, and other constants

pub mod components;
pub mod connection;
pub mod constants;
pub mod events;
pub mod geometry;
pub mod overlay;
mod plugin;
pub mod resources;
mod setup;
pub mod systems;

pub use plugin::{InteractionPlugin, VisualizationPlugin, VisualizationSet};

use bevy::prelude::*;

use crate::config::Config;
use crate::models::Dataset;
use constants::COLOR_BACKGROUND;

/// Run the visualizer over `dataset`.
///
/// Opens one window and blocks until it is closed.
pub fn run_visualizer(config: Config, dataset: &'static Dataset) -> AppExit {
    let window = Window {
        title: config.window.title.clone(),
        resolution: (config.window.width, config.window.height).into(),
        ..default()
    };

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(window),
                    ..default()
                })
                // Logging is set up by the binary.
                .disable::<bevy::log::LogPlugin>(),
        )
        .insert_resource(ClearColor(COLOR_BACKGROUND))
        .add_plugins(VisualizationPlugin::new(dataset, config))
        .run()
}
