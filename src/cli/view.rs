//! View command handler.

use bevy::app::AppExit;
use color_eyre::Result;

use crate::config::Config;
use crate::error::AppError;
use crate::models::authored;
use crate::visualization::run_visualizer;

use super::App;

impl App {
    /// Open the visualizer window over the authored dataset.
    pub fn run_view(&self) -> Result<()> {
        let config = Config::load().map_err(AppError::from)?;
        tracing::debug!(?config, "Loaded configuration");

        let dataset = authored().map_err(AppError::from)?;
        tracing::info!(
            "Opening visualizer with {} nodes and {} edges",
            dataset.nodes().len(),
            dataset.edges().len()
        );

        match run_visualizer(config, dataset) {
            AppExit::Success => Ok(()),
            AppExit::Error(code) => Err(color_eyre::eyre::eyre!(
                "Visualizer exited with code {}",
                code
            )),
        }
    }
}
