//! Scene setup: camera, lights, environment, node visuals and connections.

use std::collections::HashMap;

use bevy::core_pipeline::bloom::Bloom;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy::ui::Node as UiNode;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Category, NodeRecord, ShapeFamily};
use crate::visualization::components::{
    ConnectionLine, NodeLabel, NodeShape, NodeVisual, SelectionRing, Sparkle, StarField,
};
use crate::visualization::connection::CurveSpec;
use crate::visualization::constants::{
    glow_color, CAMERA_FOV_DEGREES, COLOR_ROOT, SELECTION_RING_ALPHA, SELECTION_RING_RADIUS,
};
use crate::visualization::geometry::{line_strip, point_cloud, wireframe_sphere, Polyhedron};
use crate::visualization::overlay::{
    spawn_detail_panel, spawn_header, spawn_instructions_hint, spawn_loading_overlay,
};
use crate::visualization::resources::{CameraRig, GraphData, VisualSettings};
use crate::visualization::systems::node::node_material;
use crate::visualization::systems::ui::{LABEL_WIDTH, SPARKLE_HALF_EXTENT};

/// Inner radius of the star shell.
const STAR_RADIUS: f32 = 100.0;
/// Thickness of the star shell.
const STAR_DEPTH: f32 = 50.0;
/// Top sparkle drift speed (units/s).
const SPARKLE_SPEED: f32 = 0.4;
/// Radius of one sparkle.
const SPARKLE_SIZE: f32 = 0.025;

/// Float phase of the node at `index`; spreads nodes over the cycle.
pub fn node_phase(index: usize) -> f32 {
    // Golden-angle steps never line up for neighboring nodes.
    index as f32 * 2.399_963
}

/// Star positions inside a spherical shell `[radius, radius + depth]`.
pub fn star_positions(rng: &mut impl Rng, count: usize, radius: f32, depth: f32) -> Vec<Vec3> {
    (0..count)
        .map(|_| random_direction(rng) * (radius + depth * rng.gen::<f32>()))
        .collect()
}

/// Sparkle start positions and velocities inside a cube of `half` extent.
pub fn sparkle_seeds(rng: &mut impl Rng, count: usize, half: f32) -> Vec<(Vec3, Vec3)> {
    (0..count)
        .map(|_| {
            let position = Vec3::new(
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
            );
            let velocity = random_direction(rng) * SPARKLE_SPEED * rng.gen_range(0.25..1.0);
            (position, velocity)
        })
        .collect()
}

fn random_direction(rng: &mut impl Rng) -> Vec3 {
    loop {
        let v = Vec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        let len_sq = v.length_squared();
        if len_sq > 1e-4 && len_sq <= 1.0 {
            return v / len_sq.sqrt();
        }
    }
}

/// Camera at the rig's pose, with HDR bloom for the emissive nodes.
pub fn setup_camera(mut commands: Commands, rig: Res<CameraRig>) {
    commands.spawn((
        Camera3d::default(),
        Camera {
            hdr: true,
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Tonemapping::TonyMcMapface,
        Bloom::NATURAL,
        rig.pose.transform(),
    ));
}

/// Ambient, two point lights, a purple spot from above and a frontal fill.
pub fn setup_lights(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
    });

    commands.spawn((
        PointLight {
            intensity: 400_000.0,
            color: Color::WHITE,
            range: 50.0,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 10.0),
    ));
    commands.spawn((
        PointLight {
            intensity: 300_000.0,
            color: Color::srgb(0.4, 0.4, 1.0),
            range: 50.0,
            ..default()
        },
        Transform::from_xyz(-10.0, -10.0, -10.0),
    ));
    commands.spawn((
        SpotLight {
            intensity: 1_500_000.0,
            color: COLOR_ROOT,
            range: 40.0,
            outer_angle: 0.5,
            inner_angle: 0.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(0.0, 10.0, 0.0).looking_at(Vec3::ZERO, Vec3::Z),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 1500.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Star field and sparkles, placed from the configured seed.
pub fn setup_environment(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<VisualSettings>,
) {
    let mut rng = StdRng::seed_from_u64(settings.scene.seed);

    let stars = star_positions(&mut rng, settings.scene.stars, STAR_RADIUS, STAR_DEPTH);
    commands.spawn((
        Mesh3d(meshes.add(point_cloud(&stars))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        })),
        Transform::default(),
        StarField,
    ));

    let sparkle_mesh = meshes.add(Sphere::new(SPARKLE_SIZE).mesh().uv(8, 6));
    let sparkle_material = materials.add(StandardMaterial {
        base_color: Color::WHITE.with_alpha(0.5),
        emissive: LinearRgba::WHITE * 2.0,
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });
    for (position, velocity) in sparkle_seeds(&mut rng, settings.scene.sparkles, SPARKLE_HALF_EXTENT) {
        commands.spawn((
            Mesh3d(sparkle_mesh.clone()),
            MeshMaterial3d(sparkle_material.clone()),
            Transform::from_translation(position),
            Sparkle { velocity },
        ));
    }

    debug!(
        stars = stars.len(),
        sparkles = settings.scene.sparkles,
        "environment spawned"
    );
}

/// One node visual and label per node, one curve per edge.
pub fn setup_graph(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    graph: Res<GraphData>,
) {
    let mut shape_meshes: HashMap<ShapeFamily, Handle<Mesh>> = HashMap::new();
    let ring_mesh = meshes.add(wireframe_sphere(SELECTION_RING_RADIUS, 16, 32));

    for (index, record) in graph.0.nodes().iter().enumerate() {
        let shape = record.category.shape();
        let mesh = shape_meshes
            .entry(shape)
            .or_insert_with(|| meshes.add(Polyhedron::for_shape(shape).into_mesh()))
            .clone();
        let material = materials.add(node_material(record.category));
        let ring_material = materials.add(StandardMaterial {
            base_color: glow_color(record.category).with_alpha(SELECTION_RING_ALPHA),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        });
        let anchor = Vec3::from_array(record.position);

        let node = commands
            .spawn((
                Transform::from_translation(anchor),
                Visibility::default(),
                NodeVisual {
                    record,
                    anchor,
                    phase: node_phase(index),
                },
            ))
            .with_children(|parent| {
                parent.spawn((
                    Mesh3d(mesh),
                    MeshMaterial3d(material.clone()),
                    Transform::default(),
                    NodeShape {
                        id: record.id,
                        spin: Vec2::ZERO,
                        scale: 1.0,
                        material,
                    },
                ));
                parent.spawn((
                    Mesh3d(ring_mesh.clone()),
                    MeshMaterial3d(ring_material),
                    Transform::default(),
                    Visibility::Hidden,
                    SelectionRing { id: record.id },
                ));
            })
            .id();

        spawn_label(&mut commands, node, record);
    }

    for edge in graph.0.edges() {
        let curve = CurveSpec::from_edge(edge);
        commands.spawn((
            Mesh3d(meshes.add(line_strip(&curve.polyline()))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: curve.color,
                alpha_mode: AlphaMode::Blend,
                unlit: true,
                ..default()
            })),
            Transform::default(),
            ConnectionLine {
                from: edge.source.id,
                to: edge.target.id,
            },
        ));
    }

    info!(
        nodes = graph.0.nodes().len(),
        edges = graph.0.edges().len(),
        "graph spawned"
    );
}

fn spawn_label(commands: &mut Commands, node: Entity, record: &'static NodeRecord) {
    let label_size = if record.category == Category::Trunk { 20.0 } else { 14.0 };

    commands
        .spawn((
            UiNode {
                position_type: PositionType::Absolute,
                width: Val::Px(LABEL_WIDTH),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                ..default()
            },
            Visibility::Hidden,
            NodeLabel { node, record },
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(record.label),
                TextFont {
                    font_size: label_size,
                    ..default()
                },
                TextColor(Color::WHITE),
                TextLayout::new_with_justify(JustifyText::Center),
            ));
            if let Some(sub_label) = record.sub_label {
                parent.spawn((
                    Text::new(sub_label.to_uppercase()),
                    TextFont {
                        font_size: 10.0,
                        ..default()
                    },
                    TextColor(glow_color(record.category)),
                ));
            }
        });
}

/// Header, detail panel, instructions hint and loading cover.
pub fn setup_overlay(mut commands: Commands, settings: Res<VisualSettings>) {
    spawn_header(&mut commands);
    spawn_detail_panel(&mut commands, settings.overlay.panel_width);
    spawn_instructions_hint(&mut commands);
    spawn_loading_overlay(&mut commands);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_positions_stay_in_shell() {
        let mut rng = StdRng::seed_from_u64(7);
        let stars = star_positions(&mut rng, 500, STAR_RADIUS, STAR_DEPTH);
        assert_eq!(stars.len(), 500);
        for star in stars {
            let r = star.length();
            assert!(r >= STAR_RADIUS - 1e-3 && r <= STAR_RADIUS + STAR_DEPTH + 1e-3);
        }
    }

    #[test]
    fn test_same_seed_same_sky() {
        let a = star_positions(&mut StdRng::seed_from_u64(42), 50, 100.0, 50.0);
        let b = star_positions(&mut StdRng::seed_from_u64(42), 50, 100.0, 50.0);
        let c = star_positions(&mut StdRng::seed_from_u64(43), 50, 100.0, 50.0);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_sparkles_start_inside_box() {
        let mut rng = StdRng::seed_from_u64(1);
        for (position, velocity) in sparkle_seeds(&mut rng, 200, 6.0) {
            assert!(position.abs().max_element() <= 6.0);
            assert!(velocity.length() <= SPARKLE_SPEED + 1e-4);
        }
    }

    #[test]
    fn test_node_phases_are_distinct() {
        let phases: Vec<f32> = (0..17).map(node_phase).collect();
        for (i, a) in phases.iter().enumerate() {
            for b in &phases[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
