use crate::config::toml_config::TomlConfig;
use crate::core::render::DEFAULT_LINE_LIMIT;
use crate::domain::model::{ColorMode, OutputFormat, Palette, Thresholds};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, Validate};

pub const DEFAULT_INPUT_PATH: &str = "declaration.txt";

/// 合併 TOML 與命令列之後的最終設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input_path: String,
    pub lines: usize,
    pub thresholds: Thresholds,
    pub palette: Palette,
    pub color: ColorMode,
    pub top: usize,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT_PATH.to_string(),
            lines: DEFAULT_LINE_LIMIT,
            thresholds: Thresholds::default(),
            palette: Palette::default(),
            color: ColorMode::default(),
            top: 0,
            format: OutputFormat::default(),
        }
    }
}

impl Settings {
    /// 只覆蓋 TOML 中有出現的欄位
    pub fn merge_toml(mut self, config: &TomlConfig) -> Self {
        if let Some(path) = config.input.as_ref().and_then(|i| i.path.clone()) {
            self.input_path = path;
        }

        if let Some(display) = &config.display {
            if let Some(lines) = display.lines {
                self.lines = lines;
            }
            if let Some(color) = display.color {
                self.color = color;
            }
            if let Some(top) = display.top {
                self.top = top;
            }
            if let Some(format) = display.format {
                self.format = format;
            }
        }

        if let Some(low_max) = config.thresholds.as_ref().and_then(|t| t.low_max) {
            self.thresholds.low_max = low_max;
        }

        if let Some(palette) = &config.palette {
            self.palette.singleton = palette.singleton.unwrap_or(self.palette.singleton);
            self.palette.low = palette.low.unwrap_or(self.palette.low);
            self.palette.high = palette.high.unwrap_or(self.palette.high);
            self.palette.unseen = palette.unseen.unwrap_or(self.palette.unseen);
        }

        self
    }
}

impl ConfigProvider for Settings {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn line_limit(&self) -> usize {
        self.lines
    }

    fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    fn palette(&self) -> &Palette {
        &self.palette
    }

    fn color_mode(&self) -> ColorMode {
        self.color
    }

    fn top(&self) -> usize {
        self.top
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)?;
        validate_positive_number("lines", self.lines, 1)?;
        validate_positive_number("low_max", self.thresholds.low_max, 2)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::AnsiColor;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.input_path(), "declaration.txt");
        assert_eq!(settings.line_limit(), 15);
        assert_eq!(settings.thresholds().low_max, 5);
        assert_eq!(settings.color_mode(), ColorMode::Auto);
        assert_eq!(settings.output_format(), OutputFormat::Text);
        assert_eq!(settings.top(), 0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_merge_toml_overrides_only_present_fields() {
        let config = TomlConfig::from_toml_str(
            r#"
[display]
lines = 4

[palette]
low = "yellow"
"#,
        )
        .unwrap();

        let settings = Settings::default().merge_toml(&config);
        assert_eq!(settings.lines, 4);
        assert_eq!(settings.palette.low, AnsiColor::Yellow);
        assert_eq!(settings.palette.singleton, AnsiColor::Blue);
        assert_eq!(settings.input_path, "declaration.txt");
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let zero_lines = Settings {
            lines: 0,
            ..Settings::default()
        };
        assert!(zero_lines.validate().is_err());

        let low_max_one = Settings {
            thresholds: Thresholds { low_max: 1 },
            ..Settings::default()
        };
        assert!(low_max_one.validate().is_err());

        let empty_path = Settings {
            input_path: String::new(),
            ..Settings::default()
        };
        assert!(empty_path.validate().is_err());
    }
}
