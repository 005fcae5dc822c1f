//! `colorspeak catalog`: the colours cards are dealt from.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{CliError, CliResult};
use crate::models::{Difficulty, CATALOG};

/// List the colour catalog
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// One catalog row.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Display and spoken name
    pub name: &'static str,
    /// Hex code
    pub hex: &'static str,
    /// Lowest difficulty whose deck includes this colour
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_difficulty: Option<Difficulty>,
}

/// Catalog rows in deal order.
#[must_use]
pub fn entries() -> Vec<CatalogEntry> {
    CATALOG
        .iter()
        .enumerate()
        .map(|(index, color)| CatalogEntry {
            name: color.name,
            hex: color.hex,
            first_difficulty: Difficulty::ALL
                .into_iter()
                .find(|level| index < level.pairs()),
        })
        .collect()
}

impl CatalogArgs {
    /// Execute catalog command
    pub fn execute(&self) -> CliResult<()> {
        let entries = entries();

        if self.json {
            let json = serde_json::to_string_pretty(&entries)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
            return Ok(());
        }

        println!("{:<8} {:<8} {}", "Color", "Hex", "First dealt");
        for entry in &entries {
            println!(
                "{:<8} {:<8} {}",
                entry.name,
                entry.hex,
                entry
                    .first_difficulty
                    .map_or("-", Difficulty::label)
            );
        }
        Ok(())
    }
}
