//! Pointer picking, selection and the interaction writer.

use bevy::ecs::system::SystemParam;
use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, SystemCursorIcon};
use bevy::winit::cursor::CursorIcon;

use crate::visualization::components::{CloseButton, DetailPanel, LoadingOverlay, NodeShape};
use crate::visualization::events::{HoverChanged, SelectionChanged};
use crate::visualization::resources::{GraphData, InteractionState, PointerState};

/// The only way systems change [`InteractionState`].
///
/// Each effective change marks the resource changed and emits the matching
/// event. Calls that leave the state as it was do neither.
#[derive(SystemParam)]
pub struct InteractionWriter<'w> {
    state: ResMut<'w, InteractionState>,
    hover_events: EventWriter<'w, HoverChanged>,
    selection_events: EventWriter<'w, SelectionChanged>,
}

impl InteractionWriter<'_> {
    /// Current state, read-only.
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Set or clear the hovered node. Returns whether it changed.
    pub fn set_hovered(&mut self, id: Option<&str>) -> bool {
        let Some(previous) = self.state.bypass_change_detection().set_hovered(id) else {
            return false;
        };
        self.state.set_changed();
        let current = self.state.hovered().map(str::to_string);
        debug!(?previous, ?current, "hover changed");
        self.hover_events.send(HoverChanged { previous, current });
        true
    }

    /// Select a node, or clear with `None`. Selecting the selected node
    /// clears it. Returns whether it changed.
    pub fn set_selected(&mut self, id: Option<&str>) -> bool {
        let Some(previous) = self.state.bypass_change_detection().set_selected(id) else {
            return false;
        };
        self.state.set_changed();
        let current = self.state.selected().map(str::to_string);
        info!(?previous, ?current, "selection changed");
        self.selection_events.send(SelectionChanged { previous, current });
        true
    }
}

/// Nearest sphere hit along a ray.
///
/// `direction` must be normalized. Candidates are `(id, center, radius)`;
/// spheres containing the origin count as hit at their exit point.
pub fn pick_nearest<'a>(
    origin: Vec3,
    direction: Vec3,
    candidates: impl IntoIterator<Item = (&'a str, Vec3, f32)>,
) -> Option<(&'a str, f32)> {
    let mut closest: Option<(&'a str, f32)> = None;

    for (id, center, radius) in candidates {
        let to_center = center - origin;
        let along = to_center.dot(direction);
        let miss_sq = to_center.length_squared() - along * along;
        let radius_sq = radius * radius;
        if miss_sq > radius_sq {
            continue;
        }

        let half_chord = (radius_sq - miss_sq).sqrt();
        let t = if along - half_chord >= 0.0 {
            along - half_chord
        } else {
            along + half_chord
        };
        if t < 0.0 {
            continue;
        }

        if closest.map_or(true, |(_, best)| t < best) {
            closest = Some((id, t));
        }
    }

    closest
}

/// World-space ray through `cursor` for a perspective camera.
///
/// `cursor` is in logical pixels from the top-left of a window of
/// `window_size`; `fov` is the vertical field of view in radians. Returns
/// the ray origin and normalized direction.
pub fn cursor_ray(
    cursor: Vec2,
    window_size: Vec2,
    fov: f32,
    camera: &GlobalTransform,
) -> Option<(Vec3, Vec3)> {
    if window_size.x <= 0.0 || window_size.y <= 0.0 {
        return None;
    }
    let ndc = Vec2::new(
        2.0 * cursor.x / window_size.x - 1.0,
        1.0 - 2.0 * cursor.y / window_size.y,
    );
    let half_height = (fov * 0.5).tan();
    let aspect = window_size.x / window_size.y;
    let local = Vec3::new(ndc.x * half_height * aspect, ndc.y * half_height, -1.0);

    let (_, rotation, origin) = camera.to_scale_rotation_translation();
    let direction = (rotation * local).normalize_or_zero();
    (direction != Vec3::ZERO).then_some((origin, direction))
}

/// Hover and click picking against node shapes.
///
/// Only the nearest node under the cursor gets hover and click. Nothing is
/// picked while the cursor is over the detail panel or the loading cover.
/// A click needs press and release on the same node; a press that moves
/// more than [`PointerState::CLICK_TOLERANCE`] pixels is an orbit drag.
/// Clicking empty space does nothing.
#[allow(clippy::too_many_arguments)]
pub fn pointer_system(
    mut writer: InteractionWriter,
    mut pointer: ResMut<PointerState>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Projection, &GlobalTransform), With<Camera3d>>,
    shapes: Query<(&NodeShape, &GlobalTransform)>,
    graph: Res<GraphData>,
    ui_query: Query<&Interaction, Or<(With<DetailPanel>, With<CloseButton>)>>,
    loading: Query<(), With<LoadingOverlay>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((Projection::Perspective(perspective), camera_transform)) = camera_query.get_single()
    else {
        return;
    };

    let over_ui = !loading.is_empty() || ui_query.iter().any(|i| *i != Interaction::None);

    let hit = if over_ui {
        None
    } else {
        window
            .cursor_position()
            .and_then(|cursor| {
                cursor_ray(cursor, window.size(), perspective.fov, camera_transform)
            })
            .and_then(|(origin, direction)| {
                let candidates = shapes.iter().filter_map(|(shape, transform)| {
                    let record = graph.0.get(shape.id)?;
                    let radius = record.category.shape().radius() * shape.scale;
                    Some((shape.id, transform.translation(), radius))
                });
                pick_nearest(origin, direction, candidates)
            })
            .map(|(id, _)| id)
    };

    if mouse_button.just_pressed(MouseButton::Left) {
        pointer.pressed_in_scene = !over_ui;
        pointer.total_movement = 0.0;
        pointer.pressed_node = hit;
    }
    if mouse_button.pressed(MouseButton::Left) {
        pointer.total_movement += mouse_motion.read().map(|ev| ev.delta.length()).sum::<f32>();
    } else {
        mouse_motion.clear();
    }

    writer.set_hovered(hit);

    if mouse_button.just_released(MouseButton::Left) {
        if let Some(id) = pointer.clicked_node(hit) {
            writer.set_selected(Some(id));
        }
        pointer.pressed_in_scene = false;
        pointer.pressed_node = None;
    }
}

/// `Escape` clears the selection.
pub fn escape_system(keyboard: Res<ButtonInput<KeyCode>>, mut writer: InteractionWriter) {
    if keyboard.just_pressed(KeyCode::Escape) {
        writer.set_selected(None);
    }
}

/// Close button: clears the selection, highlights on hover.
pub fn close_button_system(
    mut writer: InteractionWriter,
    mut buttons: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<CloseButton>)>,
) {
    for (interaction, mut background) in buttons.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                writer.set_selected(None);
            }
            Interaction::Hovered => background.0 = Color::srgba(1.0, 1.0, 1.0, 0.1),
            Interaction::None => background.0 = Color::NONE,
        }
    }
}

/// Pointer cursor while a node is hovered, default otherwise.
pub fn cursor_icon_system(
    mut commands: Commands,
    mut events: EventReader<HoverChanged>,
    windows: Query<Entity, With<PrimaryWindow>>,
) {
    let Some(last) = events.read().last() else {
        return;
    };
    let Ok(window) = windows.get_single() else {
        return;
    };
    let icon = if last.current.is_some() {
        SystemCursorIcon::Pointer
    } else {
        SystemCursorIcon::Default
    };
    commands.entity(window).insert(CursorIcon::from(icon));
}
