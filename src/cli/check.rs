//! Check command handler.

use color_eyre::Result;

use crate::error::AppError;
use crate::models::{authored, Category, Dataset};

use super::App;

/// Human-readable validation summary.
pub fn summary(dataset: &Dataset) -> String {
    let mut lines = vec![format!(
        "{} nodes, {} edges, {} categories, trunk {}",
        dataset.nodes().len(),
        dataset.edges().len(),
        dataset.category_count(),
        dataset.trunk().id
    )];
    for category in Category::ALL {
        lines.push(format!(
            "  {:<10} {}",
            category.tag(),
            dataset.by_category(category).count()
        ));
    }
    if dataset.dropped_edges().is_empty() {
        lines.push("no dangling connections".to_string());
    } else {
        for (from, to) in dataset.dropped_edges() {
            lines.push(format!("dangling connection {from} -> {to}"));
        }
    }
    lines.join("\n")
}

impl App {
    /// Validate the authored dataset; fails on invalid data.
    pub fn run_check(&self) -> Result<()> {
        let dataset = authored().map_err(AppError::from)?;
        println!("{}", summary(dataset));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_authored_dataset() {
        let text = summary(authored().unwrap());
        assert!(text.starts_with("17 nodes, 18 edges, 5 categories, trunk T1"));
        assert!(text.contains("ROOT       5"));
        assert!(text.contains("LEAF_OPP   3"));
        assert!(text.ends_with("no dangling connections"));
    }
}
