//! Neurograph - Neuro-Architectural Visualizer

use clap::Parser;
use tracing_subscriber::EnvFilter;

use neurograph::cli::App;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let app = App::parse();

    // Initialize logging (render backend chatter stays at warn)
    let level = if app.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{level},wgpu=warn,naga=warn")));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    app.run()
}
