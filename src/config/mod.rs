pub mod cli;
pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::{ColorMode, OutputFormat};
#[cfg(feature = "cli")]
use crate::utils::{error::Result, validation::Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use settings::Settings;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "word-heat")]
#[command(about = "Preview a text file with each word colored by how often it occurs")]
pub struct CliConfig {
    /// Text file to analyze [default: declaration.txt]
    #[arg(value_name = "FILE")]
    pub file: Option<String>,

    /// Number of lines to preview [default: 15]
    #[arg(short = 'n', long)]
    pub lines: Option<usize>,

    /// Highest count still shown as low-frequency [default: 5]
    #[arg(long)]
    pub low_max: Option<usize>,

    /// When to emit ANSI colors [default: auto]
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,

    /// Print the N most frequent words after the preview
    #[arg(long)]
    pub top: Option<usize>,

    /// Output format [default: text]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 預設值 < TOML 檔 < 命令列參數
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            tracing::debug!("📁 Loading configuration from: {}", path);
            let toml = TomlConfig::from_file(path)?;
            toml.validate()?;
            settings = settings.merge_toml(&toml);
        }

        if let Some(file) = &self.file {
            settings.input_path = file.clone();
        }
        if let Some(lines) = self.lines {
            settings.lines = lines;
        }
        if let Some(low_max) = self.low_max {
            settings.thresholds.low_max = low_max;
        }
        if let Some(color) = self.color {
            settings.color = color;
        }
        if let Some(top) = self.top {
            settings.top = top;
        }
        if let Some(format) = self.format {
            settings.format = format;
        }

        Ok(settings)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_args() {
        let cli = CliConfig::parse_from([
            "word-heat",
            "constitution.txt",
            "-n",
            "5",
            "--color",
            "always",
            "--format",
            "json",
            "--top",
            "3",
        ]);
        assert_eq!(cli.file.as_deref(), Some("constitution.txt"));
        assert_eq!(cli.lines, Some(5));
        assert_eq!(cli.color, Some(ColorMode::Always));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.top, Some(3));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_resolve_without_config_uses_defaults() {
        let settings = CliConfig::parse_from(["word-heat"]).resolve().unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_command_line_overrides_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[input]\npath = \"from-toml.txt\"\n\n[display]\nlines = 3\ntop = 2\n")
            .unwrap();

        let cli = CliConfig {
            config: Some(temp_file.path().to_str().unwrap().to_string()),
            lines: Some(8),
            ..CliConfig::default()
        };
        let settings = cli.resolve().unwrap();

        assert_eq!(settings.input_path, "from-toml.txt");
        assert_eq!(settings.lines, 8);
        assert_eq!(settings.top, 2);
    }

    #[test]
    fn test_invalid_toml_values_fail_resolution() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[display]\nlines = 0\n").unwrap();

        let cli = CliConfig {
            config: Some(temp_file.path().to_str().unwrap().to_string()),
            ..CliConfig::default()
        };
        assert!(cli.resolve().is_err());
    }
}
