//! UI systems: node labels, detail panel, hint and loading cover.

use bevy::prelude::*;
use bevy::ui::Node as UiNode;

use crate::visualization::components::{
    DetailBadge, DetailField, DetailIconTile, DetailPanel, HintText, InstructionsHint,
    LoadingBar, LoadingOverlay, LoadingText, NodeLabel, NodeVisual, Sparkle, StarField,
};
use crate::visualization::constants::label_offset;
use crate::visualization::events::SelectionChanged;
use crate::visualization::overlay::{loading_caption, DetailView};
use crate::visualization::resources::{
    GraphData, InteractionState, LoadingProgress, PanelSlide, VisualSettings,
};

/// Width of a label container; labels are centered on their anchor.
pub const LABEL_WIDTH: f32 = 220.0;
/// Half-extent of the box sparkles drift in.
pub const SPARKLE_HALF_EXTENT: f32 = 6.0;
/// Seconds the instructions hint takes to fade in.
const HINT_FADE_SECONDS: f32 = 0.5;
/// Star field rotation (rad/s).
const STAR_DRIFT_SPEED: f32 = 0.005;

/// Project node label anchors into screen space.
///
/// Labels whose anchor is behind the camera are hidden.
pub fn update_labels_system(
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    nodes: Query<&GlobalTransform, With<NodeVisual>>,
    mut labels: Query<(&NodeLabel, &mut UiNode, &mut Visibility)>,
) {
    let Ok((camera, camera_transform)) = camera_query.get_single() else {
        return;
    };

    for (label, mut node_ui, mut visibility) in labels.iter_mut() {
        let Ok(node_transform) = nodes.get(label.node) else {
            continue;
        };
        let world_pos =
            node_transform.transform_point(Vec3::Y * label_offset(label.record.category));

        let in_front = (world_pos - camera_transform.translation()).dot(*camera_transform.forward()) > 0.0;
        match camera.world_to_viewport(camera_transform, world_pos) {
            Ok(viewport_pos) if in_front => {
                visibility.set_if_neq(Visibility::Inherited);
                node_ui.left = Val::Px(viewport_pos.x - LABEL_WIDTH / 2.0);
                node_ui.top = Val::Px(viewport_pos.y - 12.0);
            }
            _ => {
                visibility.set_if_neq(Visibility::Hidden);
            }
        }
    }
}

/// Fill the detail panel when a resolvable node is selected.
///
/// Clearing the selection leaves the content in place so it stays visible
/// while the panel slides out.
pub fn sync_detail_panel_system(
    mut events: EventReader<SelectionChanged>,
    graph: Res<GraphData>,
    mut fields: Query<(&DetailField, &mut Text, &mut TextColor, &mut UiNode)>,
    mut badge: Query<(&mut BackgroundColor, &mut BorderColor), (With<DetailBadge>, Without<DetailIconTile>)>,
    mut tile: Query<&mut BackgroundColor, (With<DetailIconTile>, Without<DetailBadge>)>,
) {
    let Some(record) = events
        .read()
        .last()
        .and_then(|ev| ev.current.as_deref())
        .and_then(|id| graph.0.get(id))
    else {
        return;
    };

    let view = DetailView::for_node(record);
    for (field, mut text, mut color, mut node) in fields.iter_mut() {
        text.0 = view.field(*field);
        match field {
            DetailField::Badge => color.0 = view.base,
            DetailField::Icon => color.0 = view.glow,
            // Leaves have no links; drop the row so it takes no space.
            DetailField::Links => {
                node.display = if view.links.is_some() {
                    Display::Flex
                } else {
                    Display::None
                };
            }
            _ => {}
        }
    }
    for (mut background, mut border) in badge.iter_mut() {
        background.0 = view.base.with_alpha(0.125);
        border.0 = view.base;
    }
    for mut background in tile.iter_mut() {
        background.0 = view.glow.with_alpha(0.125);
    }
}

/// Slide the detail panel in while a known node is selected, out otherwise.
pub fn slide_detail_panel_system(
    time: Res<Time>,
    state: Res<InteractionState>,
    graph: Res<GraphData>,
    settings: Res<VisualSettings>,
    mut slide: ResMut<PanelSlide>,
    mut panel: Query<(&mut UiNode, &mut Visibility), With<DetailPanel>>,
) {
    let shown = state.selected().and_then(|id| graph.0.get(id)).is_some();
    let before = slide.progress;
    slide.advance(shown, time.delta_secs(), settings.overlay.slide_seconds);
    if slide.progress == before && !state.is_changed() {
        return;
    }

    let width = settings.overlay.panel_width;
    for (mut node_ui, mut visibility) in panel.iter_mut() {
        node_ui.right = Val::Px(-width * (1.0 - slide.eased()));
        visibility.set_if_neq(if slide.is_hidden() {
            Visibility::Hidden
        } else {
            Visibility::Inherited
        });
    }
}

/// Show the instructions hint while nothing is selected, fading it in.
pub fn instructions_hint_system(
    time: Res<Time>,
    state: Res<InteractionState>,
    mut hints: Query<(&mut InstructionsHint, &mut Visibility, &mut BackgroundColor)>,
    mut texts: Query<(&HintText, &mut TextColor)>,
) {
    let Ok((mut hint, mut visibility, mut background)) = hints.get_single_mut() else {
        return;
    };

    if state.selected().is_some() {
        hint.fade = 0.0;
        visibility.set_if_neq(Visibility::Hidden);
        return;
    }
    visibility.set_if_neq(Visibility::Inherited);
    if hint.fade >= HINT_FADE_SECONDS {
        return;
    }

    hint.fade = (hint.fade + time.delta_secs()).min(HINT_FADE_SECONDS);
    let alpha = hint.fade / HINT_FADE_SECONDS;
    background.0 = background.0.with_alpha(0.5 * alpha);
    for (text, mut color) in texts.iter_mut() {
        color.0 = text.color.with_alpha(text.color.alpha() * alpha);
    }
}

/// Advance the loading cover and remove it once the scene is ready.
#[allow(clippy::too_many_arguments)]
pub fn loading_overlay_system(
    mut commands: Commands,
    time: Res<Time>,
    graph: Res<GraphData>,
    settings: Res<VisualSettings>,
    mut loading: ResMut<LoadingProgress>,
    spawned: Query<(), With<NodeVisual>>,
    mut cover: Query<(Entity, &mut BackgroundColor), With<LoadingOverlay>>,
    mut bar: Query<&mut UiNode, With<LoadingBar>>,
    mut caption: Query<(&mut Text, &mut TextColor), With<LoadingText>>,
) {
    if loading.done {
        return;
    }

    let total = graph.0.nodes().len().max(1);
    let ready = spawned.iter().count() as f32 / total as f32;
    loading.advance(time.delta_secs(), ready, settings.overlay.loading_min_seconds);

    let opacity = loading.opacity();
    for mut node_ui in bar.iter_mut() {
        node_ui.width = Val::Percent(loading.fraction * 100.0);
    }
    for (mut text, mut color) in caption.iter_mut() {
        text.0 = loading_caption(loading.fraction);
        color.0 = color.0.with_alpha(opacity);
    }
    for (entity, mut background) in cover.iter_mut() {
        if loading.is_finished() {
            commands.entity(entity).despawn_recursive();
        } else {
            background.0 = background.0.with_alpha(opacity);
        }
    }

    if loading.is_finished() {
        loading.done = true;
        info!(elapsed = loading.elapsed, "scene ready");
    }
}

/// Drift sparkles, wrapping them inside their box.
pub fn drift_sparkles_system(time: Res<Time>, mut sparkles: Query<(&Sparkle, &mut Transform)>) {
    let dt = time.delta_secs();
    for (sparkle, mut transform) in sparkles.iter_mut() {
        transform.translation = wrap_in_box(transform.translation + sparkle.velocity * dt, SPARKLE_HALF_EXTENT);
    }
}

/// Turn the star field very slowly.
pub fn drift_stars_system(time: Res<Time>, mut stars: Query<&mut Transform, With<StarField>>) {
    for mut transform in stars.iter_mut() {
        transform.rotate_y(STAR_DRIFT_SPEED * time.delta_secs());
    }
}

/// Wrap each coordinate of `point` into `[-half, half)`.
pub fn wrap_in_box(point: Vec3, half: f32) -> Vec3 {
    let side = half * 2.0;
    (point + Vec3::splat(half)).rem_euclid(Vec3::splat(side)) - Vec3::splat(half)
}
