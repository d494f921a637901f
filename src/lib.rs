//! Neurograph - Neuro-Architectural Visualizer
//!
//! An interactive 3D knowledge graph of the root causes of AI amnesia:
//! a small authored tree of nodes rendered as glowing polyhedra, with
//! hover highlight, click-to-analyze camera framing and a detail panel.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod visualization;
