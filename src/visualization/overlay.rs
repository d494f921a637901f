//! 2D overlay: header, detail panel, instructions hint and loading screen.
//!
//! Everything here is spawned once at startup; `systems::ui` fills in and
//! animates it.

use bevy::prelude::*;
use bevy::ui::Node as UiNode;

use crate::models::NodeRecord;
use crate::visualization::components::{
    CloseButton, DetailBadge, DetailField, DetailIconTile, DetailPanel, HintText,
    InstructionsHint, LoadingBar, LoadingOverlay, LoadingText,
};
use crate::visualization::constants::{
    base_color, glow_color, COLOR_ACCENT, COLOR_BACKGROUND, COLOR_BRANCH, COLOR_TEXT_DIM,
    COLOR_TEXT_MUTED, COLOR_TRUNK,
};

/// Version string shown in the header status block.
const VERSION_LINE: &str = concat!("V.", env!("CARGO_PKG_VERSION"));

/// Everything the detail panel shows for one node.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub badge: String,
    pub icon: &'static str,
    pub label: String,
    pub sub_label: String,
    pub description: String,
    pub node_id: String,
    pub coords: String,
    pub links: Option<String>,
    pub base: Color,
    pub glow: Color,
}

impl DetailView {
    /// Format a node record for the panel.
    pub fn for_node(record: &NodeRecord) -> Self {
        let [x, y, z] = record.position;
        Self {
            badge: record.category.badge(),
            icon: record.category.icon(),
            label: record.label.to_string(),
            sub_label: record.sub_label.unwrap_or_default().to_string(),
            description: record.description.to_string(),
            node_id: format!("NODE ID: {}", record.id),
            coords: format!("COORDS: [{x:.1}, {y:.1}, {z:.1}]"),
            links: record
                .has_links()
                .then(|| format!("LINKS_TO: {}", record.connections.join(" -> "))),
            base: base_color(record.category),
            glow: glow_color(record.category),
        }
    }

    /// Text for one panel field.
    pub fn field(&self, field: DetailField) -> String {
        match field {
            DetailField::Badge => self.badge.clone(),
            DetailField::Icon => self.icon.to_string(),
            DetailField::Label => self.label.clone(),
            DetailField::SubLabel => self.sub_label.clone(),
            DetailField::Description => self.description.clone(),
            DetailField::NodeId => self.node_id.clone(),
            DetailField::Coords => self.coords.clone(),
            DetailField::Links => self.links.clone().unwrap_or_default(),
        }
    }
}

fn font(size: f32) -> TextFont {
    TextFont {
        font_size: size,
        ..default()
    }
}

/// Title block (top left) and status block (top right).
pub fn spawn_header(commands: &mut Commands) {
    commands
        .spawn((
            UiNode {
                position_type: PositionType::Absolute,
                top: Val::Px(24.0),
                left: Val::Px(24.0),
                padding: UiRect::all(Val::Px(16.0)),
                border: UiRect::left(Val::Px(2.0)),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.4)),
            BorderColor(COLOR_ACCENT),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("NEURO-ARCHITECTURAL VISUALIZER"),
                font(30.0),
                TextColor(Color::srgb(0.75, 0.52, 0.99)),
            ));
            parent.spawn((
                Text::new("ROOTS OF AI AMNESIA ANALYSIS"),
                font(12.0),
                TextColor(COLOR_TEXT_MUTED),
                UiNode {
                    margin: UiRect::top(Val::Px(4.0)),
                    ..default()
                },
            ));
        });

    commands
        .spawn(UiNode {
            position_type: PositionType::Absolute,
            top: Val::Px(24.0),
            right: Val::Px(24.0),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::FlexEnd,
            ..default()
        })
        .with_children(|parent| {
            for line in [VERSION_LINE, "RENDER: BEVY/WGPU", "STATUS: ONLINE"] {
                parent.spawn((Text::new(line), font(11.0), TextColor(COLOR_TEXT_DIM)));
            }
        });
}

/// Detail panel, parked off-screen to the right until a node is selected.
pub fn spawn_detail_panel(commands: &mut Commands, width: f32) {
    commands
        .spawn((
            UiNode {
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                right: Val::Px(-width),
                width: Val::Px(width),
                height: Val::Percent(100.0),
                padding: UiRect::all(Val::Px(32.0)),
                border: UiRect::left(Val::Px(1.0)),
                flex_direction: FlexDirection::Column,
                overflow: Overflow::clip(),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.8)),
            BorderColor(Color::srgba(1.0, 1.0, 1.0, 0.1)),
            Interaction::default(),
            Visibility::Hidden,
            GlobalZIndex(10),
            DetailPanel,
        ))
        .with_children(|panel| {
            // Close control
            panel
                .spawn((
                    Button,
                    UiNode {
                        position_type: PositionType::Absolute,
                        top: Val::Px(24.0),
                        right: Val::Px(24.0),
                        width: Val::Px(36.0),
                        height: Val::Px(36.0),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        ..default()
                    },
                    BorderRadius::MAX,
                    BackgroundColor(Color::NONE),
                    CloseButton,
                ))
                .with_children(|button| {
                    button.spawn((Text::new("X"), font(20.0), TextColor(COLOR_TEXT_MUTED)));
                });

            // Category badge
            panel
                .spawn((
                    UiNode {
                        margin: UiRect::new(Val::ZERO, Val::ZERO, Val::Px(48.0), Val::Px(24.0)),
                        padding: UiRect::axes(Val::Px(8.0), Val::Px(4.0)),
                        border: UiRect::all(Val::Px(1.0)),
                        align_self: AlignSelf::FlexStart,
                        ..default()
                    },
                    BorderColor(Color::NONE),
                    BackgroundColor(Color::NONE),
                    BorderRadius::all(Val::Px(4.0)),
                    DetailBadge,
                ))
                .with_children(|badge| {
                    badge.spawn((Text::default(), font(12.0), TextColor(Color::WHITE), DetailField::Badge));
                });

            // Icon and label
            panel
                .spawn(UiNode {
                    flex_direction: FlexDirection::Row,
                    align_items: AlignItems::Center,
                    column_gap: Val::Px(16.0),
                    margin: UiRect::bottom(Val::Px(16.0)),
                    ..default()
                })
                .with_children(|row| {
                    row.spawn((
                        UiNode {
                            width: Val::Px(52.0),
                            height: Val::Px(52.0),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            flex_shrink: 0.0,
                            ..default()
                        },
                        BorderRadius::all(Val::Px(12.0)),
                        BackgroundColor(Color::NONE),
                        DetailIconTile,
                    ))
                    .with_children(|tile| {
                        tile.spawn((Text::default(), font(28.0), TextColor(Color::WHITE), DetailField::Icon));
                    });
                    row.spawn((Text::default(), font(34.0), TextColor(Color::WHITE), DetailField::Label));
                });

            panel.spawn((
                Text::default(),
                font(20.0),
                TextColor(COLOR_TEXT_MUTED),
                UiNode {
                    margin: UiRect::bottom(Val::Px(32.0)),
                    padding: UiRect::bottom(Val::Px(16.0)),
                    border: UiRect::bottom(Val::Px(1.0)),
                    ..default()
                },
                BorderColor(Color::srgba(1.0, 1.0, 1.0, 0.1)),
                DetailField::SubLabel,
            ));

            panel.spawn((
                Text::default(),
                font(17.0),
                TextColor(Color::srgb(0.9, 0.91, 0.92)),
                DetailField::Description,
            ));

            // Footer pinned to the bottom
            panel
                .spawn(UiNode {
                    margin: UiRect::top(Val::Auto),
                    padding: UiRect::top(Val::Px(40.0)),
                    flex_direction: FlexDirection::Column,
                    ..default()
                })
                .with_children(|footer| {
                    footer.spawn((Text::default(), font(12.0), TextColor(COLOR_TEXT_DIM), DetailField::NodeId));
                    footer.spawn((Text::default(), font(12.0), TextColor(COLOR_TEXT_DIM), DetailField::Coords));
                    footer.spawn((
                        Text::default(),
                        font(12.0),
                        TextColor(COLOR_TEXT_DIM),
                        UiNode {
                            display: Display::None,
                            margin: UiRect::top(Val::Px(8.0)),
                            ..default()
                        },
                        DetailField::Links,
                    ));
                });
        });
}

/// Bottom-left pill with navigation instructions.
pub fn spawn_instructions_hint(commands: &mut Commands) {
    let muted = COLOR_TEXT_MUTED;
    let spans: [(&str, Color); 8] = [
        ("DRAG", COLOR_ACCENT),
        (" to rotate", muted),
        ("  \u{b7}  ", muted),
        ("SCROLL", COLOR_TRUNK),
        (" to zoom", muted),
        ("  \u{b7}  ", muted),
        ("CLICK", COLOR_BRANCH),
        (" nodes to analyze", muted),
    ];

    commands
        .spawn((
            UiNode {
                position_type: PositionType::Absolute,
                bottom: Val::Px(24.0),
                left: Val::Px(24.0),
                padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
            BorderColor(Color::srgba(1.0, 1.0, 1.0, 0.05)),
            BorderRadius::MAX,
            InstructionsHint { fade: 0.0 },
        ))
        .with_children(|pill| {
            pill.spawn((
                Text::default(),
                font(14.0),
                TextColor(muted.with_alpha(0.0)),
                HintText { color: muted },
            ))
            .with_children(|text| {
                for (span, color) in spans {
                    text.spawn((
                        TextSpan::new(span),
                        font(14.0),
                        TextColor(color.with_alpha(0.0)),
                        HintText { color },
                    ));
                }
            });
        });
}

/// Full-screen loading cover with a progress bar.
pub fn spawn_loading_overlay(commands: &mut Commands) {
    commands
        .spawn((
            UiNode {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(16.0),
                ..default()
            },
            BackgroundColor(COLOR_BACKGROUND),
            GlobalZIndex(100),
            LoadingOverlay,
        ))
        .with_children(|cover| {
            cover
                .spawn((
                    UiNode {
                        width: Val::Px(400.0),
                        height: Val::Px(10.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.2, 0.2, 0.2)),
                ))
                .with_children(|track| {
                    track.spawn((
                        UiNode {
                            width: Val::Percent(0.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(COLOR_ACCENT),
                        LoadingBar,
                    ));
                });
            cover.spawn((
                Text::new(loading_caption(0.0)),
                font(19.0),
                TextColor(Color::WHITE),
                LoadingText,
            ));
        });
}

/// Caption under the loading bar.
pub fn loading_caption(fraction: f32) -> String {
    format!("LOADING NEURAL LINK {:.0}%", fraction.clamp(0.0, 1.0) * 100.0)
}
