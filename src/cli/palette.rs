//! `colorspeak palette`: generate a palette without the TUI.

use clap::Args;
use crossterm::style::{Color, Stylize};
use std::io::IsTerminal;
use std::sync::Arc;

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::models::Palette;
use crate::palette::{GeminiClient, GenerationJob, PaletteError, PaletteGenerator};

/// Generate a UI palette from a description
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Vibe, theme or description, e.g. "Cyberpunk neon city"
    #[arg(value_name = "PROMPT")]
    prompt: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl PaletteArgs {
    /// Execute palette command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let client = GeminiClient::from_config(&config.palette)?;

        let palette = generate(Arc::new(client), &self.prompt)?;

        if self.json {
            let json = serde_json::to_string_pretty(&palette)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
        } else {
            print!("{}", format_palette(&palette, std::io::stdout().is_terminal()));
        }
        Ok(())
    }
}

/// Runs one generation to completion on a worker thread.
pub fn generate(generator: Arc<dyn PaletteGenerator>, prompt: &str) -> CliResult<Palette> {
    let mut job = GenerationJob::new();
    job.start(generator, prompt)
        .map_err(|e| CliError::validation(format!("{e:#}")))?;

    let result = job.wait().unwrap_or(Err(PaletteError::Interrupted));
    tracing::debug!(status = %job.status(), "palette job finished");
    result.map_err(CliError::from)
}

/// Human-readable palette, with colour chips when `color` is set.
#[must_use]
pub fn format_palette(palette: &Palette, color: bool) -> String {
    let mut lines = vec![palette.name.clone(), palette.description.clone(), String::new()];
    let indent = " ".repeat(if color { 25 } else { 20 });

    for item in &palette.colors {
        let chip = if color {
            let rgb = item.rgb();
            let swatch = "    ".on(Color::Rgb {
                r: rgb.r,
                g: rgb.g,
                b: rgb.b,
            });
            format!("{swatch} ")
        } else {
            String::new()
        };
        lines.push(format!(
            "{chip}{}  {:<10}  {}",
            item.hex,
            item.role.as_str(),
            item.name
        ));
        if !item.description.is_empty() {
            lines.push(format!("{indent}{}", item.description));
        }
    }

    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ColorItem, ColorRole, PaletteDraft};

    struct Fixed;

    impl PaletteGenerator for Fixed {
        fn generate(&self, prompt: &str) -> Result<PaletteDraft, PaletteError> {
            Ok(PaletteDraft {
                name: format!("{prompt} palette"),
                description: "Calm".to_string(),
                colors: vec![ColorItem {
                    hex: "#0077BE".to_string(),
                    name: "Ocean".to_string(),
                    role: ColorRole::Primary,
                    description: "Deep water".to_string(),
                }],
            })
        }
    }

    struct Failing;

    impl PaletteGenerator for Failing {
        fn generate(&self, _prompt: &str) -> Result<PaletteDraft, PaletteError> {
            Err(PaletteError::InvalidFormat("missing field `colors`".to_string()))
        }
    }

    #[test]
    fn test_generate_and_format() {
        let palette = generate(Arc::new(Fixed), "sea").unwrap();
        assert_eq!(palette.name, "sea palette");

        let text = format_palette(&palette, false);
        assert!(text.starts_with("sea palette\nCalm\n"));
        assert!(text.contains("#0077BE  primary"));
        assert!(text.contains("Deep water"));
    }

    #[test]
    fn test_generate_error_surfaces() {
        let err = generate(Arc::new(Failing), "sea").unwrap_err();
        assert!(matches!(err, CliError::Palette(PaletteError::InvalidFormat(_))));
        assert!(err.to_string().contains("missing field `colors`"));
    }
}
