//! Domain models for the knowledge graph.
//!
//! The graph is authored once as static data in [`data`] and read through a
//! validated [`Dataset`].

mod category;
pub mod data;
mod dataset;
mod node;

pub use category::{Category, ShapeFamily};
pub use dataset::{authored, Dataset, Edge};
pub use node::NodeRecord;
