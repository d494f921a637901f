//! Visualization plugins for Bevy.

use bevy::prelude::*;

use super::events::{HoverChanged, SelectionChanged};
use super::resources::{
    CameraRig, GraphData, InteractionState, LoadingProgress, PanelSlide, PointerState,
    VisualSettings,
};
use super::setup::{setup_camera, setup_environment, setup_graph, setup_lights, setup_overlay};
use super::systems;
use crate::config::Config;
use crate::models::Dataset;

/// Frame phases of the visualizer.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualizationSet {
    /// Systems that write [`InteractionState`].
    Input,
    /// Systems that react to interaction and animate the scene.
    React,
}

/// Interaction state and its change events, without any rendering.
pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InteractionState>()
            .init_resource::<PointerState>()
            .add_event::<HoverChanged>()
            .add_event::<SelectionChanged>()
            .configure_sets(Update, (VisualizationSet::Input, VisualizationSet::React).chain());
    }
}

/// Plugin that renders the dataset and its overlay.
pub struct VisualizationPlugin {
    /// Dataset to render.
    pub dataset: &'static Dataset,
    /// Viewer settings.
    pub config: Config,
}

impl VisualizationPlugin {
    /// Create a new visualization plugin.
    pub fn new(dataset: &'static Dataset, config: Config) -> Self {
        Self { dataset, config }
    }
}

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(InteractionPlugin)
            .insert_resource(GraphData(self.dataset))
            .insert_resource(CameraRig::new(self.config.camera.clone()))
            .insert_resource(VisualSettings {
                scene: self.config.scene.clone(),
                overlay: self.config.overlay.clone(),
            })
            .init_resource::<PanelSlide>()
            .init_resource::<LoadingProgress>()
            .add_systems(
                Startup,
                (setup_camera, setup_lights, setup_environment, setup_graph, setup_overlay),
            )
            .add_systems(
                Update,
                (
                    systems::pointer_system,
                    systems::escape_system,
                    systems::close_button_system,
                )
                    .chain()
                    .in_set(VisualizationSet::Input),
            )
            .add_systems(
                Update,
                (
                    (
                        systems::retarget_camera_system,
                        systems::camera_input_system,
                        systems::apply_camera_rig_system,
                    )
                        .chain(),
                    (
                        systems::float_nodes_system,
                        systems::spin_and_scale_system,
                        systems::highlight_materials_system,
                        systems::selection_ring_system,
                    ),
                    (
                        systems::sync_detail_panel_system,
                        systems::slide_detail_panel_system,
                        systems::instructions_hint_system,
                        systems::loading_overlay_system,
                        systems::update_labels_system,
                        systems::cursor_icon_system,
                    ),
                    (systems::drift_sparkles_system, systems::drift_stars_system),
                )
                    .in_set(VisualizationSet::React),
            );
    }
}
