//! Camera framing transitions and orbit/dolly controls.

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::visualization::components::{CloseButton, DetailPanel};
use crate::visualization::events::SelectionChanged;
use crate::visualization::resources::{CameraPose, CameraRig, GraphData, PointerState};

/// Pixel-unit scroll deltas (trackpads) per line of wheel scroll.
const PIXELS_PER_LINE: f32 = 100.0;

/// Goal pose for a selection: overview when cleared, focus on the node when
/// it resolves, `None` when the id is unknown.
pub fn framing_for(graph: &GraphData, selected: Option<&str>) -> Option<CameraPose> {
    match selected {
        None => Some(CameraPose::OVERVIEW),
        Some(id) => graph
            .0
            .get(id)
            .map(|record| CameraPose::focus(Vec3::from_array(record.position))),
    }
}

/// Start one framing transition per selection change.
pub fn retarget_camera_system(
    mut events: EventReader<SelectionChanged>,
    graph: Res<GraphData>,
    mut rig: ResMut<CameraRig>,
) {
    for event in events.read() {
        match framing_for(&graph, event.current.as_deref()) {
            Some(goal) => {
                debug!(selected = ?event.current, ?goal, "camera retarget");
                rig.retarget(goal);
            }
            None => warn!(selected = ?event.current, "selected node not in dataset, camera unchanged"),
        }
    }
}

/// Left-drag orbits around the current target; scroll dollies.
///
/// Drags only start from the 3D view and only count once they exceed the
/// click tolerance. Scrolling over the detail panel is ignored.
pub fn camera_input_system(
    mut rig: ResMut<CameraRig>,
    pointer: Res<PointerState>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll: EventReader<MouseWheel>,
    ui_query: Query<&Interaction, Or<(With<DetailPanel>, With<CloseButton>)>>,
) {
    let delta: Vec2 = mouse_motion.read().map(|ev| ev.delta).sum();
    if mouse_button.pressed(MouseButton::Left)
        && pointer.pressed_in_scene
        && !pointer.is_click()
        && delta != Vec2::ZERO
    {
        let speed = rig.settings.rotate_speed;
        rig.orbit(-delta.x * speed, -delta.y * speed);
    }

    let over_ui = ui_query.iter().any(|i| *i != Interaction::None);
    let amount: f32 = scroll
        .read()
        .map(|ev| match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y / PIXELS_PER_LINE,
        })
        .sum();
    if amount != 0.0 && !over_ui {
        rig.dolly(amount);
    }
}

/// Advance the rig and write its pose into the camera transform.
pub fn apply_camera_rig_system(
    time: Res<Time>,
    mut rig: ResMut<CameraRig>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
) {
    if rig.is_transitioning() {
        rig.advance(time.delta_secs());
    }
    if let Ok(mut transform) = camera_query.get_single_mut() {
        *transform = rig.pose.transform();
    }
}
