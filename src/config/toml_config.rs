use crate::domain::model::{AnsiColor, ColorMode, OutputFormat};
use crate::utils::error::{Result, WordHeatError};
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

static ENV_VAR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    pub input: Option<InputConfig>,
    pub display: Option<DisplayConfig>,
    pub thresholds: Option<ThresholdConfig>,
    pub palette: Option<PaletteConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub lines: Option<usize>,
    pub color: Option<ColorMode>,
    pub top: Option<usize>,
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    pub low_max: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaletteConfig {
    pub singleton: Option<AnsiColor>,
    pub low: Option<AnsiColor>,
    pub high: Option<AnsiColor>,
    pub unseen: Option<AnsiColor>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|source| WordHeatError::InputError {
                path: path.as_ref().display().to_string(),
                source,
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| WordHeatError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CORPUS_DIR})，未定義的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_REGEX
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(path) = self.input.as_ref().and_then(|i| i.path.as_deref()) {
            validate_path("input.path", path)?;
        }

        if let Some(lines) = self.display.as_ref().and_then(|d| d.lines) {
            validate_positive_number("display.lines", lines, 1)?;
        }

        if let Some(low_max) = self.thresholds.as_ref().and_then(|t| t.low_max) {
            validate_positive_number("thresholds.low_max", low_max, 2)?;
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[input]
path = "declaration.txt"

[display]
lines = 10
color = "never"
top = 5
format = "json"

[thresholds]
low_max = 3

[palette]
singleton = "bright_blue"
high = "magenta"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let display = config.display.as_ref().unwrap();
        assert_eq!(display.lines, Some(10));
        assert_eq!(display.color, Some(ColorMode::Never));
        assert_eq!(display.format, Some(OutputFormat::Json));
        assert_eq!(config.thresholds.as_ref().unwrap().low_max, Some(3));

        let palette = config.palette.as_ref().unwrap();
        assert_eq!(palette.singleton, Some(AnsiColor::BrightBlue));
        assert_eq!(palette.high, Some(AnsiColor::Magenta));
        assert_eq!(palette.low, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config, TomlConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("WORD_HEAT_TEST_CORPUS", "/srv/corpus");

        let toml_content = r#"
[input]
path = "${WORD_HEAT_TEST_CORPUS}/declaration.txt"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.input.unwrap().path.as_deref(),
            Some("/srv/corpus/declaration.txt")
        );

        std::env::remove_var("WORD_HEAT_TEST_CORPUS");
    }

    #[test]
    fn test_undefined_env_var_is_left_unchanged() {
        std::env::remove_var("WORD_HEAT_UNSET_VAR");

        let toml_content = r#"
[input]
path = "${WORD_HEAT_UNSET_VAR}/x"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.input.unwrap().path.as_deref(),
            Some("${WORD_HEAT_UNSET_VAR}/x")
        );
    }

    #[test]
    fn test_unknown_color_is_rejected() {
        let toml_content = r#"
[palette]
low = "chartreuse"
"#;
        assert!(matches!(
            TomlConfig::from_toml_str(toml_content),
            Err(WordHeatError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[thresholds]
low_max = 1
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[display]\nlines = 3\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.display.unwrap().lines, Some(3));
    }

    #[test]
    fn test_missing_config_file() {
        let result = TomlConfig::from_file("/definitely/not/here.toml");
        assert!(matches!(result, Err(WordHeatError::InputError { .. })));
    }
}
