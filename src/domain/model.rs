use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 讀入的原始文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: String,
    pub text: String,
}

/// 小寫單字 -> 出現次數
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    counts: HashMap<String, usize>,
    total: usize,
}

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// 呼叫端須先轉成小寫
    pub fn add(&mut self, normalized: String) {
        *self.counts.entry(normalized).or_insert(0) += 1;
        self.total += 1;
    }

    /// 任何大小寫都可查詢，不存在時回傳 0
    pub fn get(&self, word: &str) -> usize {
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            self.counts
                .get(&word.to_ascii_lowercase())
                .copied()
                .unwrap_or(0)
        } else {
            self.counts.get(word).copied().unwrap_or(0)
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// 次數遞減，同次數時按字母排序
    pub fn top(&self, n: usize) -> Vec<TopWord> {
        let mut entries: Vec<(&String, &usize)> = self.counts.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        entries
            .into_iter()
            .take(n)
            .map(|(word, count)| TopWord {
                word: word.clone(),
                count: *count,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopWord {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorCategory {
    Singleton,
    Low,
    High,
    Unseen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    /// `Low` 類別的上限 (含)
    pub low_max: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { low_max: 5 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl AnsiColor {
    /// SGR 前景色碼
    pub fn fg_code(self) -> u8 {
        match self {
            AnsiColor::Black => 30,
            AnsiColor::Red => 31,
            AnsiColor::Green => 32,
            AnsiColor::Yellow => 33,
            AnsiColor::Blue => 34,
            AnsiColor::Magenta => 35,
            AnsiColor::Cyan => 36,
            AnsiColor::White => 37,
            AnsiColor::BrightBlack => 90,
            AnsiColor::BrightRed => 91,
            AnsiColor::BrightGreen => 92,
            AnsiColor::BrightYellow => 93,
            AnsiColor::BrightBlue => 94,
            AnsiColor::BrightMagenta => 95,
            AnsiColor::BrightCyan => 96,
            AnsiColor::BrightWhite => 97,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub singleton: AnsiColor,
    pub low: AnsiColor,
    pub high: AnsiColor,
    pub unseen: AnsiColor,
}

impl Palette {
    pub fn color_for(&self, category: ColorCategory) -> AnsiColor {
        match category {
            ColorCategory::Singleton => self.singleton,
            ColorCategory::Low => self.low,
            ColorCategory::High => self.high,
            ColorCategory::Unseen => self.unseen,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            singleton: AnsiColor::Blue,
            low: AnsiColor::Green,
            high: AnsiColor::Red,
            unseen: AnsiColor::White,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Analysis {
    pub document: Document,
    pub counts: WordCounts,
}

/// 預覽區段中每個類別出現的單字數
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryTally {
    pub singleton: usize,
    pub low: usize,
    pub high: usize,
    pub unseen: usize,
}

impl CategoryTally {
    pub fn record(&mut self, category: ColorCategory) {
        match category {
            ColorCategory::Singleton => self.singleton += 1,
            ColorCategory::Low => self.low += 1,
            ColorCategory::High => self.high += 1,
            ColorCategory::Unseen => self.unseen += 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub lines_rendered: usize,
    pub tally: CategoryTally,
}
