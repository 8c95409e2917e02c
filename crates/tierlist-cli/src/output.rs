//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use tierlist_domain::{Item, Template, Tier};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a tier board.
    ///
    /// With `show_names` off, items are listed by id only.
    pub fn format_tiers(&self, title: &str, tiers: &[Tier], show_names: bool) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(tiers)?),
            OutputFormat::Table => Ok(self.format_tiers_table(title, tiers, show_names)),
            OutputFormat::Quiet => Ok(tiers
                .iter()
                .map(|tier| {
                    let ids: Vec<&str> = tier.items.iter().map(|i| i.id.as_str()).collect();
                    format!("{}: {}", tier.id, ids.join(" "))
                })
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_tiers_table(&self, title: &str, tiers: &[Tier], show_names: bool) -> String {
        if tiers.is_empty() {
            return format!("{}\n{}", title, self.colorize("No tiers yet.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Tier", "ID", "Items"]);

        for tier in tiers {
            let items: Vec<String> = tier
                .items
                .iter()
                .map(|item| if show_names { item.name.clone() } else { item.id.clone() })
                .collect();
            builder.push_record([tier.name.clone(), tier.id.clone(), items.join(", ")]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", title, table)
    }

    /// Format library items.
    pub fn format_items(&self, items: &[Item]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
            OutputFormat::Quiet => {
                let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
                Ok(ids.join("\n"))
            }
            OutputFormat::Table => {
                if items.is_empty() {
                    return Ok(self.colorize("Library is empty.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "Name", "Image"]);
                for item in items {
                    builder.push_record([
                        item.id.as_str(),
                        item.name.as_str(),
                        item.image.as_deref().unwrap_or("-"),
                    ]);
                }

                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
        }
    }

    /// Format the template list, marking the active one.
    pub fn format_templates(&self, templates: &[&Template], active: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(templates)?),
            OutputFormat::Quiet => {
                let ids: Vec<&str> = templates.iter().map(|t| t.id.as_str()).collect();
                Ok(ids.join("\n"))
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["", "ID", "Name", "Tiers"]);
                for template in templates {
                    let marker = if template.id == active { "*" } else { "" };
                    builder.push_record([
                        marker.to_string(),
                        template.id.clone(),
                        template.name.clone(),
                        template.tier_definitions.len().to_string(),
                    ]);
                }

                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Report the outcome of an operation that may be a silent no-op.
    pub fn outcome(&self, changed: bool, done: &str, skipped: &str) -> String {
        if changed {
            self.success(done)
        } else {
            self.warning(skipped)
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
