//! Node categories and the fixed shape family assigned to each.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// Classification of a node in the knowledge graph.
///
/// The set is closed: every category has exactly one shape family, one
/// palette entry and one icon glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// A root cause, drawn below the trunk.
    #[serde(rename = "ROOT")]
    Root,
    /// The core problem every root feeds into.
    #[serde(rename = "TRUNK")]
    Trunk,
    /// A symptom growing out of the core problem.
    #[serde(rename = "BRANCH")]
    Branch,
    /// A gap left by current approaches.
    #[serde(rename = "LEAF_GAP")]
    LeafGap,
    /// An opportunity for future approaches.
    #[serde(rename = "LEAF_OPP")]
    LeafOpportunity,
}

impl Category {
    /// All categories, in tree order from roots to leaves.
    pub const ALL: [Category; 5] = [
        Category::Root,
        Category::Trunk,
        Category::Branch,
        Category::LeafGap,
        Category::LeafOpportunity,
    ];

    /// External tag (e.g. `LEAF_GAP`).
    pub fn tag(self) -> &'static str {
        match self {
            Category::Root => "ROOT",
            Category::Trunk => "TRUNK",
            Category::Branch => "BRANCH",
            Category::LeafGap => "LEAF_GAP",
            Category::LeafOpportunity => "LEAF_OPP",
        }
    }

    /// Badge text shown in the detail panel (`LEAF_GAP` -> `LEAF GAP`).
    pub fn badge(self) -> String {
        self.tag().replacen('_', " ", 1)
    }

    /// Solid used to render nodes of this category.
    pub fn shape(self) -> ShapeFamily {
        match self {
            Category::Trunk => ShapeFamily::Icosahedron,
            Category::Root => ShapeFamily::Octahedron,
            Category::Branch | Category::LeafGap | Category::LeafOpportunity => {
                ShapeFamily::Dodecahedron
            }
        }
    }

    /// Glyph drawn in the detail panel's icon tile.
    ///
    /// Restricted to ASCII so it renders with the embedded default font.
    pub fn icon(self) -> &'static str {
        match self {
            Category::Root => "@",
            Category::Trunk => "!",
            Category::Branch => "Y",
            Category::LeafGap => "X",
            Category::LeafOpportunity => "*",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Category {
    type Err = DataError;

    /// Parse an external tag, case-insensitively. Unknown tags are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Category::ALL
            .into_iter()
            .find(|c| c.tag() == normalized)
            .ok_or_else(|| DataError::UnknownCategory(s.to_string()))
    }
}

/// Polyhedron family used for a node mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeFamily {
    /// 20 triangular faces.
    Icosahedron,
    /// 8 triangular faces.
    Octahedron,
    /// 12 pentagonal faces.
    Dodecahedron,
}

impl ShapeFamily {
    /// Circumscribed radius in world units.
    pub fn radius(self) -> f32 {
        match self {
            ShapeFamily::Icosahedron => 1.2,
            ShapeFamily::Octahedron => 0.8,
            ShapeFamily::Dodecahedron => 0.6,
        }
    }
}
