//! Visual constants for the graph visualization.

use bevy::prelude::*;

use crate::models::Category;

// =============================================================================
// Node Palettes
// =============================================================================

/// Root base color (Purple, #a855f7).
pub const COLOR_ROOT: Color = Color::srgb(0.659, 0.333, 0.969);
/// Trunk base color (Light blue, #38bdf8).
pub const COLOR_TRUNK: Color = Color::srgb(0.220, 0.741, 0.973);
/// Branch base color (Emerald, #10b981).
pub const COLOR_BRANCH: Color = Color::srgb(0.063, 0.725, 0.506);
/// Gap leaf base color (Red, #ef4444).
pub const COLOR_LEAF_GAP: Color = Color::srgb(0.937, 0.267, 0.267);
/// Opportunity leaf base color (Gold, #eab308).
pub const COLOR_LEAF_OPP: Color = Color::srgb(0.918, 0.702, 0.031);

/// Root glow color (#d8b4fe).
pub const GLOW_ROOT: Color = Color::srgb(0.847, 0.706, 0.996);
/// Trunk glow color (#bae6fd).
pub const GLOW_TRUNK: Color = Color::srgb(0.729, 0.902, 0.992);
/// Branch glow color (#6ee7b7).
pub const GLOW_BRANCH: Color = Color::srgb(0.431, 0.906, 0.718);
/// Gap leaf glow color (#fca5a5).
pub const GLOW_LEAF_GAP: Color = Color::srgb(0.988, 0.647, 0.647);
/// Opportunity leaf glow color (#fde047).
pub const GLOW_LEAF_OPP: Color = Color::srgb(0.992, 0.878, 0.278);

// =============================================================================
// Highlight
// =============================================================================

/// Scale target of a hovered or selected node.
pub const ACTIVE_SCALE: f32 = 1.3;
/// Scale target of a resting node.
pub const REST_SCALE: f32 = 1.0;
/// Emissive intensity of a hovered or selected node.
pub const ACTIVE_EMISSIVE: f32 = 0.8;
/// Emissive intensity of a resting node.
pub const REST_EMISSIVE: f32 = 0.2;
/// Exponential smoothing rate for node scale, per second.
pub const SCALE_EASE_RATE: f32 = 5.0;

// =============================================================================
// Motion
// =============================================================================

/// Idle spin about the vertical axis (rad/s).
pub const SPIN_Y_SPEED: f32 = 0.2;
/// Idle spin about the depth axis (rad/s).
pub const SPIN_Z_SPEED: f32 = 0.05;
/// Float oscillation speed multiplier.
pub const FLOAT_SPEED: f32 = 2.0;
/// Peak vertical float displacement.
pub const FLOAT_HEIGHT: f32 = 0.1;

// =============================================================================
// Decorations
// =============================================================================

/// Selection ring radius in the node's float frame.
pub const SELECTION_RING_RADIUS: f32 = 1.5;
/// Selection ring opacity.
pub const SELECTION_RING_ALPHA: f32 = 0.1;
/// Connection curve opacity.
pub const CONNECTION_ALPHA: f32 = 0.4;
/// Points sampled along each connection curve.
pub const CONNECTION_SEGMENTS: usize = 48;
/// Label height above a trunk node.
pub const TRUNK_LABEL_OFFSET: f32 = 1.8;
/// Label height above any other node.
pub const LABEL_OFFSET: f32 = 1.2;

// =============================================================================
// Camera
// =============================================================================

/// Overview camera position.
pub const OVERVIEW_POSITION: Vec3 = Vec3::new(0.0, 2.0, 14.0);
/// Overview camera target.
pub const OVERVIEW_TARGET: Vec3 = Vec3::new(0.0, 1.0, 0.0);
/// Distance along +Z from a focused node to the camera.
pub const FOCUS_DISTANCE: f32 = 6.0;
/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 50.0;

// =============================================================================
// Overlay
// =============================================================================

/// Scene clear color.
pub const COLOR_BACKGROUND: Color = Color::srgb(0.02, 0.02, 0.02);
/// Accent used by the header rule and loading bar.
pub const COLOR_ACCENT: Color = COLOR_ROOT;
/// Muted overlay text.
pub const COLOR_TEXT_MUTED: Color = Color::srgb(0.61, 0.64, 0.69);
/// Dim monospace footer text.
pub const COLOR_TEXT_DIM: Color = Color::srgb(0.42, 0.45, 0.5);

// =============================================================================
// Helpers
// =============================================================================

/// Resting material hue for a category.
pub fn base_color(category: Category) -> Color {
    match category {
        Category::Root => COLOR_ROOT,
        Category::Trunk => COLOR_TRUNK,
        Category::Branch => COLOR_BRANCH,
        Category::LeafGap => COLOR_LEAF_GAP,
        Category::LeafOpportunity => COLOR_LEAF_OPP,
    }
}

/// Highlight hue for a category (emissive glow, ring tint, sub-labels).
pub fn glow_color(category: Category) -> Color {
    match category {
        Category::Root => GLOW_ROOT,
        Category::Trunk => GLOW_TRUNK,
        Category::Branch => GLOW_BRANCH,
        Category::LeafGap => GLOW_LEAF_GAP,
        Category::LeafOpportunity => GLOW_LEAF_OPP,
    }
}

/// Height of a node's label above its center.
pub fn label_offset(category: Category) -> f32 {
    match category {
        Category::Trunk => TRUNK_LABEL_OFFSET,
        _ => LABEL_OFFSET,
    }
}
