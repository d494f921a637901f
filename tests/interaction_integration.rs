//! Headless tests of how the scene reacts to interaction changes.
//!
//! These drive a Bevy `App` with `MinimalPlugins`, so nothing is rendered.

use std::time::Duration;

use bevy::ecs::system::RunSystemOnce;
use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy::window::{PrimaryWindow, SystemCursorIcon};
use bevy::winit::cursor::CursorIcon;

use neurograph::config::CameraConfig;
use neurograph::models::authored;
use neurograph::visualization::components::{
    CloseButton, DetailPanel, LoadingOverlay, NodeShape, SelectionRing,
};
use neurograph::visualization::constants::{glow_color, ACTIVE_EMISSIVE};
use neurograph::visualization::events::SelectionChanged;
use neurograph::visualization::resources::{CameraPose, CameraRig, GraphData, InteractionState};
use neurograph::visualization::systems::{
    apply_camera_rig_system, close_button_system, cursor_icon_system, highlight_materials_system,
    pointer_system, retarget_camera_system, selection_ring_system, spin_and_scale_system,
    InteractionWriter,
};
use neurograph::visualization::{InteractionPlugin, VisualizationSet};

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(InteractionPlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(16)))
        .insert_resource(GraphData(authored().unwrap()))
        .insert_resource(CameraRig::new(CameraConfig::default()))
        .init_resource::<Assets<StandardMaterial>>()
        .add_systems(
            Update,
            (
                (retarget_camera_system, apply_camera_rig_system).chain(),
                spin_and_scale_system,
                highlight_materials_system,
                selection_ring_system,
            )
                .in_set(VisualizationSet::React),
        );
    app
}

fn select(app: &mut App, id: Option<&'static str>) {
    app.world_mut()
        .run_system_once(move |mut writer: InteractionWriter| {
            writer.set_selected(id);
        })
        .unwrap();
}

fn hover(app: &mut App, id: Option<&'static str>) {
    app.world_mut()
        .run_system_once(move |mut writer: InteractionWriter| {
            writer.set_hovered(id);
        })
        .unwrap();
}

fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

/// Spawn one shape (with material) and one ring per node.
fn spawn_nodes(app: &mut App) {
    let dataset = authored().unwrap();
    for record in dataset.nodes() {
        let material = app
            .world_mut()
            .resource_mut::<Assets<StandardMaterial>>()
            .add(StandardMaterial::default());
        app.world_mut().spawn((
            Transform::default(),
            NodeShape {
                id: record.id,
                spin: Vec2::ZERO,
                scale: 1.0,
                material,
            },
        ));
        app.world_mut()
            .spawn((Visibility::Hidden, SelectionRing { id: record.id }));
    }
}

fn material_of(app: &mut App, id: &str) -> Handle<StandardMaterial> {
    let mut query = app.world_mut().query::<&NodeShape>();
    query
        .iter(app.world())
        .find(|shape| shape.id == id)
        .map(|shape| shape.material.clone())
        .unwrap()
}

fn emissive_of(app: &mut App, id: &str) -> LinearRgba {
    let handle = material_of(app, id);
    app.world()
        .resource::<Assets<StandardMaterial>>()
        .get(&handle)
        .unwrap()
        .emissive
}

#[test]
fn test_selecting_root_frames_it_then_overview_on_clear() {
    let mut app = test_app();
    app.update();

    select(&mut app, Some("R1"));
    run_frames(&mut app, 400);

    let rig = app.world().resource::<CameraRig>();
    assert_eq!(rig.pose.target, Vec3::new(-4.0, -3.0, 2.0));
    assert_eq!(rig.pose.position, Vec3::new(-4.0, -3.0, 8.0));
    assert!(!rig.is_transitioning());

    select(&mut app, None);
    run_frames(&mut app, 400);

    let rig = app.world().resource::<CameraRig>();
    assert_eq!(rig.pose, CameraPose::OVERVIEW);
}

#[test]
fn test_transition_is_animated() {
    let mut app = test_app();
    app.update();

    select(&mut app, Some("T1"));
    run_frames(&mut app, 2);

    let rig = app.world().resource::<CameraRig>();
    assert!(rig.is_transitioning());
    assert_ne!(rig.pose, CameraPose::OVERVIEW);
    assert_ne!(rig.pose, CameraPose::focus(Vec3::ZERO));
}

#[test]
fn test_unknown_selection_leaves_camera_alone() {
    let mut app = test_app();
    app.update();

    select(&mut app, Some("NOT_A_NODE"));
    run_frames(&mut app, 10);

    let rig = app.world().resource::<CameraRig>();
    assert!(!rig.is_transitioning());
    assert_eq!(rig.pose, CameraPose::OVERVIEW);
    assert_eq!(
        app.world().resource::<InteractionState>().selected(),
        Some("NOT_A_NODE")
    );
}

#[test]
fn test_clicking_selected_node_deselects() {
    let mut app = test_app();
    select(&mut app, Some("B3"));
    select(&mut app, Some("B3"));
    assert_eq!(app.world().resource::<InteractionState>().selected(), None);
}

#[test]
fn test_selection_sets_glow_and_ring() {
    let mut app = test_app();
    spawn_nodes(&mut app);
    app.update();

    select(&mut app, Some("B1"));
    app.update();

    let record = authored().unwrap().get("B1").unwrap();
    let expected = LinearRgba::from(glow_color(record.category)) * ACTIVE_EMISSIVE;
    assert_eq!(emissive_of(&mut app, "B1"), expected);

    let mut rings = app.world_mut().query::<(&SelectionRing, &Visibility)>();
    for (ring, visibility) in rings.iter(app.world()) {
        if ring.id == "B1" {
            assert_eq!(*visibility, Visibility::Inherited);
        } else {
            assert_eq!(*visibility, Visibility::Hidden);
        }
    }
}

#[test]
fn test_unchanged_state_does_not_touch_materials() {
    let mut app = test_app();
    spawn_nodes(&mut app);
    select(&mut app, Some("R1"));
    run_frames(&mut app, 3);

    // Overwrite the material; a system writing it again would undo this.
    let sentinel = LinearRgba::rgb(9.0, 0.0, 9.0);
    let handle = material_of(&mut app, "R1");
    app.world_mut()
        .resource_mut::<Assets<StandardMaterial>>()
        .get_mut(&handle)
        .unwrap()
        .emissive = sentinel;

    run_frames(&mut app, 10);
    assert_eq!(emissive_of(&mut app, "R1"), sentinel);

    // Changes elsewhere leave R1 alone too.
    hover(&mut app, Some("R2"));
    run_frames(&mut app, 2);
    assert_eq!(emissive_of(&mut app, "R1"), sentinel);
    assert_ne!(emissive_of(&mut app, "R2"), sentinel);
}

#[test]
fn test_hovered_node_grows() {
    let mut app = test_app();
    spawn_nodes(&mut app);
    app.update();

    hover(&mut app, Some("T1"));
    run_frames(&mut app, 120);

    let mut shapes = app.world_mut().query::<(&NodeShape, &Transform)>();
    for (shape, transform) in shapes.iter(app.world()) {
        if shape.id == "T1" {
            assert!((shape.scale - 1.3).abs() < 1e-3);
            assert!((transform.scale.x - 1.3).abs() < 1e-3);
        } else {
            assert_eq!(shape.scale, 1.0);
        }
    }

    hover(&mut app, None);
    run_frames(&mut app, 120);
    let mut shapes = app.world_mut().query::<&NodeShape>();
    assert!(shapes.iter(app.world()).all(|shape| (shape.scale - 1.0).abs() < 1e-3));
}

const SCREEN_CENTER: Vec2 = Vec2::new(640.0, 360.0);

/// Window, camera and a single T1 shape in the middle of the screen.
///
/// Without `InputPlugin` nothing clears `ButtonInput` between frames, so
/// the helpers below do it by hand.
fn pointer_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(InteractionPlugin)
        .add_event::<MouseMotion>()
        .init_resource::<ButtonInput<MouseButton>>()
        .insert_resource(GraphData(authored().unwrap()))
        .add_systems(
            Update,
            (pointer_system, close_button_system, cursor_icon_system)
                .chain()
                .in_set(VisualizationSet::Input),
        );

    let mut window = Window::default();
    window.set_cursor_position(Some(SCREEN_CENTER));
    app.world_mut().spawn((window, PrimaryWindow));
    app.world_mut().spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 50f32.to_radians(),
            ..default()
        }),
        GlobalTransform::from(Transform::from_xyz(0.0, 0.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y)),
    ));
    app.world_mut().spawn((
        GlobalTransform::IDENTITY,
        NodeShape {
            id: "T1",
            spin: Vec2::ZERO,
            scale: 1.0,
            material: Handle::default(),
        },
    ));
    app
}

fn move_cursor(app: &mut App, position: Vec2) {
    let mut query = app
        .world_mut()
        .query_filtered::<&mut Window, With<PrimaryWindow>>();
    query
        .single_mut(app.world_mut())
        .set_cursor_position(Some(position));
}

fn press(app: &mut App) {
    {
        let mut buttons = app.world_mut().resource_mut::<ButtonInput<MouseButton>>();
        buttons.clear();
        buttons.press(MouseButton::Left);
    }
    app.update();
}

fn release(app: &mut App) {
    {
        let mut buttons = app.world_mut().resource_mut::<ButtonInput<MouseButton>>();
        buttons.clear();
        buttons.release(MouseButton::Left);
    }
    app.update();
}

fn drag(app: &mut App, delta: Vec2) {
    app.world_mut().resource_mut::<ButtonInput<MouseButton>>().clear();
    app.world_mut().send_event(MouseMotion { delta });
    app.update();
}

fn selected(app: &App) -> Option<&str> {
    app.world().resource::<InteractionState>().selected()
}

fn hovered(app: &App) -> Option<&str> {
    app.world().resource::<InteractionState>().hovered()
}

#[test]
fn test_click_on_node_selects_it() {
    let mut app = pointer_app();
    app.update();
    assert_eq!(hovered(&app), Some("T1"));
    assert_eq!(selected(&app), None);

    press(&mut app);
    release(&mut app);
    assert_eq!(selected(&app), Some("T1"));
}

#[test]
fn test_click_on_empty_space_does_nothing() {
    let mut app = pointer_app();
    move_cursor(&mut app, Vec2::new(10.0, 10.0));
    app.update();
    assert_eq!(hovered(&app), None);

    press(&mut app);
    release(&mut app);
    assert_eq!(selected(&app), None);
}

#[test]
fn test_drag_past_tolerance_does_not_select() {
    let mut app = pointer_app();
    app.update();

    press(&mut app);
    drag(&mut app, Vec2::new(4.0, 0.0));
    drag(&mut app, Vec2::new(0.0, 3.0));
    release(&mut app);
    assert_eq!(selected(&app), None);
    assert_eq!(hovered(&app), Some("T1"));
}

#[test]
fn test_small_jitter_still_clicks() {
    let mut app = pointer_app();
    app.update();

    press(&mut app);
    drag(&mut app, Vec2::new(2.0, 1.0));
    release(&mut app);
    assert_eq!(selected(&app), Some("T1"));
}

#[test]
fn test_release_over_node_after_press_elsewhere_does_not_select() {
    let mut app = pointer_app();
    move_cursor(&mut app, Vec2::new(10.0, 10.0));
    app.update();

    press(&mut app);
    move_cursor(&mut app, SCREEN_CENTER);
    release(&mut app);
    assert_eq!(hovered(&app), Some("T1"));
    assert_eq!(selected(&app), None);
}

#[test]
fn test_hovered_detail_panel_blocks_picking() {
    let mut app = pointer_app();
    app.world_mut().spawn((DetailPanel, Interaction::Hovered));
    app.update();
    assert_eq!(hovered(&app), None);

    press(&mut app);
    release(&mut app);
    assert_eq!(selected(&app), None);
}

#[test]
fn test_loading_cover_blocks_picking() {
    let mut app = pointer_app();
    let cover = app.world_mut().spawn(LoadingOverlay).id();
    press(&mut app);
    release(&mut app);
    assert_eq!(hovered(&app), None);
    assert_eq!(selected(&app), None);

    app.world_mut().despawn(cover);
    press(&mut app);
    release(&mut app);
    assert_eq!(selected(&app), Some("T1"));
}

#[test]
fn test_pressed_close_button_clears_selection() {
    let mut app = pointer_app();
    app.update();
    select(&mut app, Some("T1"));

    app.world_mut()
        .spawn((CloseButton, Interaction::Pressed, BackgroundColor::default()));
    app.update();

    assert_eq!(selected(&app), None);
    let last = app
        .world_mut()
        .resource_mut::<Events<SelectionChanged>>()
        .drain()
        .last()
        .unwrap();
    assert_eq!(last.previous.as_deref(), Some("T1"));
    assert_eq!(last.current, None);
}

#[test]
fn test_cursor_icon_follows_hover() {
    let mut app = pointer_app();
    app.update();

    let mut windows = app
        .world_mut()
        .query_filtered::<&CursorIcon, With<PrimaryWindow>>();
    let icon = windows.single(app.world());
    assert!(matches!(icon, CursorIcon::System(SystemCursorIcon::Pointer)));

    move_cursor(&mut app, Vec2::new(10.0, 10.0));
    app.update();
    let icon = windows.single(app.world());
    assert!(matches!(icon, CursorIcon::System(SystemCursorIcon::Default)));
}
