//! ECS resources for graph visualization state.
//!
//! Resources are global singleton data - there's only one instance
//! of each resource in the entire app.

use bevy::prelude::*;

use crate::config::{CameraConfig, OverlayConfig, SceneConfig};
use crate::models::Dataset;
use crate::visualization::constants::{FOCUS_DISTANCE, OVERVIEW_POSITION, OVERVIEW_TARGET};

// =============================================================================
// Graph Data
// =============================================================================

/// Shared, read-only handle to the dataset being rendered.
#[derive(Resource, Clone, Copy)]
pub struct GraphData(pub &'static Dataset);

// =============================================================================
// Interaction State
// =============================================================================

/// Which node the pointer is over and which node is selected.
///
/// Only [`InteractionState::set_hovered`] and
/// [`InteractionState::set_selected`] mutate it. Ids are not validated.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    hovered: Option<String>,
    selected: Option<String>,
}

impl InteractionState {
    /// Node currently under the pointer.
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Node currently selected.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Whether `id` is hovered or selected.
    pub fn is_active(&self, id: &str) -> bool {
        self.hovered() == Some(id) || self.selected() == Some(id)
    }

    /// Whether `id` is the selected node.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected() == Some(id)
    }

    /// Set or clear the hovered node. Never toggles.
    ///
    /// Returns the previous value when the state changed.
    pub fn set_hovered(&mut self, id: Option<&str>) -> Option<Option<String>> {
        let next = id.map(str::to_string);
        if self.hovered == next {
            return None;
        }
        Some(std::mem::replace(&mut self.hovered, next))
    }

    /// Set or clear the selected node.
    ///
    /// Selecting the node that is already selected clears the selection.
    /// Returns the previous value when the state changed.
    pub fn set_selected(&mut self, id: Option<&str>) -> Option<Option<String>> {
        let next = match id {
            Some(id) if self.selected() == Some(id) => None,
            other => other.map(str::to_string),
        };
        if self.selected == next {
            return None;
        }
        Some(std::mem::replace(&mut self.selected, next))
    }
}

// =============================================================================
// Camera State
// =============================================================================

/// Where the camera sits and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    /// Fixed pose framing the whole graph.
    pub const OVERVIEW: CameraPose = CameraPose {
        position: OVERVIEW_POSITION,
        target: OVERVIEW_TARGET,
    };

    /// Pose looking straight at `node` from [`FOCUS_DISTANCE`] along +Z.
    pub fn focus(node: Vec3) -> Self {
        Self {
            position: node + Vec3::Z * FOCUS_DISTANCE,
            target: node,
        }
    }

    /// Camera transform for this pose.
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position).looking_at(self.target, Vec3::Y)
    }
}

/// Camera rig with an optional framing goal it eases toward.
///
/// `pose` is the live camera; `goal` is set by selection changes and
/// cleared once reached or when the user takes over with orbit/dolly input.
#[derive(Resource, Debug, Clone)]
pub struct CameraRig {
    pub pose: CameraPose,
    pub goal: Option<CameraPose>,
    pub settings: CameraConfig,
}

impl CameraRig {
    const SETTLE_EPSILON: f32 = 1e-3;
    const MIN_POLAR: f32 = 0.05;

    /// Rig starting at the overview pose.
    pub fn new(settings: CameraConfig) -> Self {
        Self {
            pose: CameraPose::OVERVIEW,
            goal: None,
            settings,
        }
    }

    /// Start a transition; replaces any transition in flight.
    pub fn retarget(&mut self, goal: CameraPose) {
        self.goal = Some(goal);
    }

    /// Whether a transition is still running.
    pub fn is_transitioning(&self) -> bool {
        self.goal.is_some()
    }

    /// Advance the transition by `dt` seconds using exponential smoothing.
    ///
    /// Roughly 98% of the remaining distance is covered per `smooth_time`.
    pub fn advance(&mut self, dt: f32) {
        let Some(goal) = self.goal else {
            return;
        };
        let smooth_time = self.settings.smooth_time.max(1e-3);
        let t = 1.0 - (-4.0 * dt / smooth_time).exp();
        self.pose.position = self.pose.position.lerp(goal.position, t);
        self.pose.target = self.pose.target.lerp(goal.target, t);

        if self.pose.position.distance(goal.position) < Self::SETTLE_EPSILON
            && self.pose.target.distance(goal.target) < Self::SETTLE_EPSILON
        {
            self.pose = goal;
            self.goal = None;
        }
    }

    /// Rotate the camera around its target. Cancels any transition.
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.goal = None;
        let offset = self.pose.position - self.pose.target;
        let radius = offset.length().max(1e-3);
        let mut azimuth = offset.x.atan2(offset.z);
        let mut polar = (offset.y / radius).clamp(-1.0, 1.0).acos();

        azimuth += delta_yaw;
        polar = (polar + delta_pitch).clamp(Self::MIN_POLAR, std::f32::consts::PI - Self::MIN_POLAR);

        self.pose.position = self.pose.target
            + Vec3::new(
                radius * polar.sin() * azimuth.sin(),
                radius * polar.cos(),
                radius * polar.sin() * azimuth.cos(),
            );
    }

    /// Move toward (`amount > 0`) or away from the target. Cancels any
    /// transition. Distance stays within the configured bounds.
    pub fn dolly(&mut self, amount: f32) {
        self.goal = None;
        let offset = self.pose.position - self.pose.target;
        let distance = offset.length().max(1e-3);
        let factor = (1.0 - amount * self.settings.dolly_speed * 0.1).max(0.05);
        let next = (distance * factor).clamp(self.settings.min_distance, self.settings.max_distance);
        self.pose.position = self.pose.target + offset / distance * next;
    }
}

// =============================================================================
// Pointer State
// =============================================================================

/// Left-button gesture tracking, to tell a click from an orbit drag.
#[derive(Resource, Default, Debug)]
pub struct PointerState {
    /// Whether the left button went down over the 3D view.
    pub pressed_in_scene: bool,
    /// Total mouse movement since the press (pixels).
    pub total_movement: f32,
    /// Node under the cursor when the button went down.
    pub pressed_node: Option<&'static str>,
}

impl PointerState {
    /// Movement below this many pixels still counts as a click.
    pub const CLICK_TOLERANCE: f32 = 5.0;

    /// Whether the gesture so far is a click.
    pub fn is_click(&self) -> bool {
        self.total_movement < Self::CLICK_TOLERANCE
    }

    /// Node clicked when the button is released over `released_on`.
    ///
    /// Press and release must land on the same node without dragging.
    pub fn clicked_node(&self, released_on: Option<&'static str>) -> Option<&'static str> {
        if !self.pressed_in_scene || !self.is_click() {
            return None;
        }
        released_on.filter(|id| self.pressed_node == Some(*id))
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Scene and overlay settings used by startup and UI systems.
#[derive(Resource, Debug, Clone, Default)]
pub struct VisualSettings {
    pub scene: SceneConfig,
    pub overlay: OverlayConfig,
}

// =============================================================================
// Overlay State
// =============================================================================

/// Progress of the detail panel slide, `0.0` hidden to `1.0` shown.
#[derive(Resource, Debug, Default)]
pub struct PanelSlide {
    pub progress: f32,
}

impl PanelSlide {
    /// Move toward shown or hidden; a full slide takes `duration` seconds.
    pub fn advance(&mut self, shown: bool, dt: f32, duration: f32) {
        let step = if duration > 0.0 { dt / duration } else { 1.0 };
        self.progress = if shown {
            (self.progress + step).min(1.0)
        } else {
            (self.progress - step).max(0.0)
        };
    }

    /// Eased progress (cubic ease-out).
    pub fn eased(&self) -> f32 {
        1.0 - (1.0 - self.progress).powi(3)
    }

    /// Whether the panel is fully off-screen.
    pub fn is_hidden(&self) -> bool {
        self.progress <= 0.0
    }
}

/// Loading screen state.
#[derive(Resource, Debug, Default)]
pub struct LoadingProgress {
    /// Seconds since startup.
    pub elapsed: f32,
    /// Fraction `0.0..=1.0` shown on the bar.
    pub fraction: f32,
    /// Seconds spent fading out after reaching 100%.
    pub fade: f32,
    /// Whether the overlay has finished and been removed.
    pub done: bool,
}

impl LoadingProgress {
    /// Fade-out duration once loading completes.
    pub const FADE_SECONDS: f32 = 0.4;

    /// Advance by `dt`. The bar never runs ahead of `ready` (the share of
    /// node visuals spawned) nor of the minimum display time.
    pub fn advance(&mut self, dt: f32, ready: f32, min_seconds: f32) {
        self.elapsed += dt;
        let timed = if min_seconds > 0.0 {
            (self.elapsed / min_seconds).min(1.0)
        } else {
            1.0
        };
        self.fraction = timed.min(ready).clamp(0.0, 1.0);
        if self.fraction >= 1.0 {
            self.fade += dt;
        }
    }

    /// Opacity of the cover, `1.0` until loading completes.
    pub fn opacity(&self) -> f32 {
        1.0 - (self.fade / Self::FADE_SECONDS).min(1.0)
    }

    /// Whether the fade-out has completed.
    pub fn is_finished(&self) -> bool {
        self.fade >= Self::FADE_SECONDS
    }
}
