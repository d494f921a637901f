//! ECS systems for graph visualization.
//!
//! Systems are functions that operate on components and resources each frame.

pub mod camera;
pub mod interaction;
pub mod node;
pub mod ui;

pub use camera::{apply_camera_rig_system, camera_input_system, retarget_camera_system};
pub use interaction::{
    close_button_system, cursor_icon_system, escape_system, pointer_system, InteractionWriter,
};
pub use node::{
    float_nodes_system, highlight_materials_system, selection_ring_system, spin_and_scale_system,
};
pub use ui::{
    drift_sparkles_system, drift_stars_system, instructions_hint_system, loading_overlay_system,
    slide_detail_panel_system, sync_detail_panel_system, update_labels_system,
};
