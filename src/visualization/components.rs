//! ECS components for graph visualization.
//!
//! Components are data attached to entities. Each entity can have
//! any combination of components.

use bevy::prelude::*;

use crate::models::NodeRecord;

/// Root entity of one node: carries the float motion at the node's anchor.
///
/// Children are the [`NodeShape`] mesh and the [`SelectionRing`].
#[derive(Component)]
pub struct NodeVisual {
    /// Authored record this visual renders.
    pub record: &'static NodeRecord,
    /// Fixed world position the float motion oscillates around.
    pub anchor: Vec3,
    /// Per-node offset into the float cycle, so nodes do not bob in unison.
    pub phase: f32,
}

/// The spinning, scaling polyhedron of a node.
///
/// Spin angles and the current scale live here and are written in place
/// every frame.
#[derive(Component)]
pub struct NodeShape {
    /// Id of the owning node.
    pub id: &'static str,
    /// Accumulated spin about Y (x) and Z (y), radians.
    pub spin: Vec2,
    /// Current uniform scale, easing toward the highlight target.
    pub scale: f32,
    /// Per-node material, updated when highlight state changes.
    pub material: Handle<StandardMaterial>,
}

/// Translucent wireframe sphere shown around the selected node.
#[derive(Component)]
pub struct SelectionRing {
    /// Id of the owning node.
    pub id: &'static str,
}

/// One rendered connection curve.
#[derive(Component)]
pub struct ConnectionLine {
    pub from: &'static str,
    pub to: &'static str,
}

/// Screen-space label container that follows a node.
#[derive(Component)]
pub struct NodeLabel {
    /// Node root entity this label follows.
    pub node: Entity,
    pub record: &'static NodeRecord,
}

/// Slowly drifting decorative particle.
#[derive(Component)]
pub struct Sparkle {
    pub velocity: Vec3,
}

/// Star field point cloud.
#[derive(Component)]
pub struct StarField;

/// Detail panel root (slides in from the right).
#[derive(Component)]
pub struct DetailPanel;

/// One text field of the detail panel.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailField {
    Badge,
    Icon,
    Label,
    SubLabel,
    Description,
    NodeId,
    Coords,
    Links,
}

/// Badge frame, recolored per category.
#[derive(Component)]
pub struct DetailBadge;

/// Icon tile, recolored per category.
#[derive(Component)]
pub struct DetailIconTile;

/// Close button of the detail panel.
#[derive(Component)]
pub struct CloseButton;

/// Instructions hint shown while nothing is selected.
#[derive(Component)]
pub struct InstructionsHint {
    /// Seconds of fade-in completed, reset whenever the hint hides.
    pub fade: f32,
}

/// Text inside the instructions hint, with its resting color.
#[derive(Component)]
pub struct HintText {
    pub color: Color,
}

/// Full-screen loading cover.
#[derive(Component)]
pub struct LoadingOverlay;

/// Fill of the loading bar.
#[derive(Component)]
pub struct LoadingBar;

/// Percentage text of the loading screen.
#[derive(Component)]
pub struct LoadingText;
