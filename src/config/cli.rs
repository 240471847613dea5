use crate::core::TextSource;
use crate::utils::error::{Result, WordHeatError};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct LocalSource {
    base_path: PathBuf,
}

impl LocalSource {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Default for LocalSource {
    fn default() -> Self {
        Self::new(".")
    }
}

impl TextSource for LocalSource {
    /// 一次讀完整個檔案；絕對路徑會忽略 base_path
    fn read_text(&self, path: &str) -> Result<String> {
        let full_path = self.base_path.join(path);
        let data = fs::read(&full_path).map_err(|source| WordHeatError::InputError {
            path: path.to_string(),
            source,
        })?;

        String::from_utf8(data).map_err(|_| WordHeatError::EncodingError {
            path: path.to_string(),
        })
    }
}
