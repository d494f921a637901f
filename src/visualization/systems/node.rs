//! Node highlight, idle motion and selection ring.

use std::collections::HashSet;

use bevy::prelude::*;

use crate::models::Category;
use crate::visualization::components::{NodeShape, NodeVisual, SelectionRing};
use crate::visualization::constants::{
    base_color, glow_color, ACTIVE_EMISSIVE, ACTIVE_SCALE, FLOAT_HEIGHT, FLOAT_SPEED,
    REST_EMISSIVE, REST_SCALE, SCALE_EASE_RATE, SPIN_Y_SPEED, SPIN_Z_SPEED,
};
use crate::visualization::events::{HoverChanged, SelectionChanged};
use crate::visualization::resources::{GraphData, InteractionState};

/// Target look of a node for its highlight state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeAppearance {
    pub scale: f32,
    pub emissive: Color,
    pub emissive_intensity: f32,
}

impl NodeAppearance {
    /// Appearance of a node of `category`, active when hovered or selected.
    pub fn resolve(category: Category, active: bool) -> Self {
        if active {
            Self {
                scale: ACTIVE_SCALE,
                emissive: glow_color(category),
                emissive_intensity: ACTIVE_EMISSIVE,
            }
        } else {
            Self {
                scale: REST_SCALE,
                emissive: base_color(category),
                emissive_intensity: REST_EMISSIVE,
            }
        }
    }

    /// Emissive term as stored on the material.
    pub fn emissive_linear(&self) -> LinearRgba {
        LinearRgba::from(self.emissive) * self.emissive_intensity
    }
}

/// Glassy material for a resting node of `category`.
pub fn node_material(category: Category) -> StandardMaterial {
    let appearance = NodeAppearance::resolve(category, false);
    StandardMaterial {
        base_color: base_color(category),
        emissive: appearance.emissive_linear(),
        perceptual_roughness: 0.1,
        metallic: 0.1,
        clearcoat: 1.0,
        specular_transmission: 0.9,
        thickness: 0.5,
        ior: 1.5,
        attenuation_color: Color::WHITE,
        attenuation_distance: 0.5,
        ..default()
    }
}

/// One frame of exponential ease from `current` toward `target`.
pub fn ease_scale(current: f32, target: f32, dt: f32) -> f32 {
    current + (target - current) * (SCALE_EASE_RATE * dt).min(1.0)
}

/// Float offset of a node at `elapsed` seconds: a vertical bob within
/// `±FLOAT_HEIGHT` and a small rotational wobble.
pub fn float_transform(elapsed: f32, phase: f32) -> Transform {
    let angle = (elapsed + phase) / 4.0 * FLOAT_SPEED;
    Transform::from_translation(Vec3::Y * angle.sin() * FLOAT_HEIGHT).with_rotation(
        Quat::from_euler(
            EulerRot::XYZ,
            angle.cos() / 8.0,
            angle.sin() / 8.0,
            angle.sin() / 20.0,
        ),
    )
}

/// Move node roots along their float cycle.
pub fn float_nodes_system(time: Res<Time>, mut nodes: Query<(&NodeVisual, &mut Transform)>) {
    let elapsed = time.elapsed_secs();
    for (visual, mut transform) in nodes.iter_mut() {
        let offset = float_transform(elapsed, visual.phase);
        transform.translation = visual.anchor + offset.translation;
        transform.rotation = offset.rotation;
    }
}

/// Spin node shapes and ease their scale toward the highlight target.
pub fn spin_and_scale_system(
    time: Res<Time>,
    state: Res<InteractionState>,
    mut shapes: Query<(&mut NodeShape, &mut Transform)>,
) {
    let dt = time.delta_secs();
    for (mut shape, mut transform) in shapes.iter_mut() {
        shape.spin += Vec2::new(SPIN_Y_SPEED, SPIN_Z_SPEED) * dt;
        let target = if state.is_active(shape.id) { ACTIVE_SCALE } else { REST_SCALE };
        shape.scale = ease_scale(shape.scale, target, dt);

        transform.rotation = Quat::from_euler(EulerRot::YZX, shape.spin.x, shape.spin.y, 0.0);
        transform.scale = Vec3::splat(shape.scale);
    }
}

/// Ids whose highlight may have changed, from this frame's events.
pub fn touched_ids<'a>(
    hovers: impl IntoIterator<Item = &'a HoverChanged>,
    selections: impl IntoIterator<Item = &'a SelectionChanged>,
) -> HashSet<&'a str> {
    let hover_ids = hovers
        .into_iter()
        .flat_map(|ev| [ev.previous.as_deref(), ev.current.as_deref()]);
    let selection_ids = selections
        .into_iter()
        .flat_map(|ev| [ev.previous.as_deref(), ev.current.as_deref()]);
    hover_ids.chain(selection_ids).flatten().collect()
}

/// Rewrite emissive of nodes whose hover or selection changed.
///
/// Nodes untouched by this frame's events keep their material as is.
pub fn highlight_materials_system(
    mut hovers: EventReader<HoverChanged>,
    mut selections: EventReader<SelectionChanged>,
    state: Res<InteractionState>,
    graph: Res<GraphData>,
    shapes: Query<&NodeShape>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let touched = touched_ids(hovers.read(), selections.read());
    if touched.is_empty() {
        return;
    }

    for shape in shapes.iter().filter(|shape| touched.contains(shape.id)) {
        let Some(record) = graph.0.get(shape.id) else {
            continue;
        };
        let appearance = NodeAppearance::resolve(record.category, state.is_active(shape.id));
        if let Some(material) = materials.get_mut(&shape.material) {
            material.emissive = appearance.emissive_linear();
        }
    }
}

/// Show the ring of the selected node only.
pub fn selection_ring_system(
    state: Res<InteractionState>,
    mut rings: Query<(&SelectionRing, &mut Visibility)>,
) {
    if !state.is_changed() {
        return;
    }
    for (ring, mut visibility) in rings.iter_mut() {
        let next = if state.is_selected(ring.id) {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        visibility.set_if_neq(next);
    }
}
