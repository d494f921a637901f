//! Change notifications emitted by the interaction writer.
//!
//! Systems that re-derive visuals from [`InteractionState`] subscribe with
//! an `EventReader` instead of polling the state every frame.
//!
//! [`InteractionState`]: super::resources::InteractionState

use bevy::prelude::*;

/// The hovered node changed.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct HoverChanged {
    pub previous: Option<String>,
    pub current: Option<String>,
}

/// The selected node changed.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct SelectionChanged {
    pub previous: Option<String>,
    pub current: Option<String>,
}
