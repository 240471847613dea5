pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalSource, settings::Settings, toml_config::TomlConfig};
pub use core::{etl::EtlEngine, pipeline::FrequencyPipeline};
pub use utils::error::{Result, WordHeatError};
