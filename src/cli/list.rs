//! List subcommand - print nodes as text or JSON.

use clap::Parser;

use crate::error::AppError;
use crate::models::{authored, Category, NodeRecord};

/// List nodes of the authored dataset.
#[derive(Parser)]
pub struct ListCommand {
    /// Only nodes of this category (ROOT, TRUNK, BRANCH, LEAF_GAP, LEAF_OPP)
    #[arg(short, long)]
    pub category: Option<Category>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    /// Run the list command.
    pub fn run(&self) -> color_eyre::Result<()> {
        let dataset = authored().map_err(AppError::from)?;
        let records: Vec<&NodeRecord> = match self.category {
            Some(category) => dataset.by_category(category).collect(),
            None => dataset.nodes().iter().collect(),
        };

        let output = if self.json {
            serde_json::to_string_pretty(&records).map_err(AppError::from)?
        } else {
            render_text(&records)
        };
        println!("{output}");
        Ok(())
    }
}

/// One line per node: id, category tag, label and outgoing links.
pub fn render_text(records: &[&NodeRecord]) -> String {
    records
        .iter()
        .map(|record| {
            let mut line = format!("{:<8} {:<9} {}", record.id, record.category.tag(), record.label);
            if record.has_links() {
                line.push_str(&format!(" -> {}", record.connections.join(", ")));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
