//! 把單字依出現頻率著色後輸出到終端機。
//!
//! 每一行只保留單字本身，以單一空白連接並在行尾多留一個空白；
//! 標點與原本的空白排版都會被捨棄。

use crate::core::{classify::classify, tokenizer};
use crate::domain::model::{
    ColorCategory, ColorMode, Palette, RenderReport, Thresholds, WordCounts,
};
use crate::utils::error::Result;
use serde::Serialize;
use std::io::{IsTerminal, Write};

pub const DEFAULT_LINE_LIMIT: usize = 15;

/// 把類別對應到前綴/後綴標記 (例如 ANSI 碼)
pub trait Theme {
    fn prefix(&self, category: ColorCategory) -> &str;
    fn suffix(&self, category: ColorCategory) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsiTheme {
    reset: String,
    singleton: String,
    low: String,
    high: String,
    unseen: String,
}

impl AnsiTheme {
    pub fn from_palette(palette: &Palette) -> Self {
        let sgr = |category| format!("\x1b[{}m", palette.color_for(category).fg_code());
        Self {
            // 只重設前景色
            reset: "\x1b[39m".into(),
            singleton: sgr(ColorCategory::Singleton),
            low: sgr(ColorCategory::Low),
            high: sgr(ColorCategory::High),
            unseen: sgr(ColorCategory::Unseen),
        }
    }

    /// 不輸出任何 ANSI 碼
    pub fn none() -> Self {
        Self {
            reset: String::new(),
            singleton: String::new(),
            low: String::new(),
            high: String::new(),
            unseen: String::new(),
        }
    }

    fn style(&self, category: ColorCategory) -> &str {
        match category {
            ColorCategory::Singleton => self.singleton.as_str(),
            ColorCategory::Low => self.low.as_str(),
            ColorCategory::High => self.high.as_str(),
            ColorCategory::Unseen => self.unseen.as_str(),
        }
    }
}

impl Default for AnsiTheme {
    fn default() -> Self {
        Self::from_palette(&Palette::default())
    }
}

impl Theme for AnsiTheme {
    fn prefix(&self, category: ColorCategory) -> &str {
        self.style(category)
    }

    fn suffix(&self, _category: ColorCategory) -> &str {
        self.reset.as_str()
    }
}

/// `auto` 時：stdout 是終端機且未設定 `NO_COLOR` 才上色
pub fn colors_enabled(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
        }
    }
}

pub fn theme_for(mode: ColorMode, palette: &Palette) -> AnsiTheme {
    if colors_enabled(mode) {
        AnsiTheme::from_palette(palette)
    } else {
        AnsiTheme::none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledWord<'a> {
    pub word: &'a str,
    pub count: usize,
    pub category: ColorCategory,
}

pub fn styled_words<'a>(
    line: &'a str,
    counts: &WordCounts,
    thresholds: Thresholds,
) -> Vec<StyledWord<'a>> {
    tokenizer::words(line)
        .map(|word| {
            let count = counts.get(word);
            StyledWord {
                word,
                count,
                category: classify(count, thresholds),
            }
        })
        .collect()
}

/// 依 `'\n'` 切行，最多取 `max_lines` 行。檔尾換行會多出一個空行。
pub fn preview_lines(text: &str, max_lines: usize) -> impl Iterator<Item = &str> {
    text.split('\n').take(max_lines)
}

pub fn format_words(words: &[StyledWord<'_>], theme: &dyn Theme) -> String {
    let mut rendered = words
        .iter()
        .map(|w| {
            format!(
                "{}{}{}",
                theme.prefix(w.category),
                w.word,
                theme.suffix(w.category)
            )
        })
        .collect::<Vec<_>>()
        .join(" ");
    rendered.push(' ');
    rendered
}

pub fn render_line(
    line: &str,
    counts: &WordCounts,
    thresholds: Thresholds,
    theme: &dyn Theme,
) -> String {
    format_words(&styled_words(line, counts, thresholds), theme)
}

pub fn render_preview<W: Write + ?Sized>(
    text: &str,
    counts: &WordCounts,
    thresholds: Thresholds,
    theme: &dyn Theme,
    max_lines: usize,
    out: &mut W,
) -> Result<RenderReport> {
    let mut report = RenderReport::default();

    for line in preview_lines(text, max_lines) {
        let words = styled_words(line, counts, thresholds);
        for w in &words {
            report.tally.record(w.category);
        }
        writeln!(out, "{}", format_words(&words, theme))?;
        report.lines_rendered += 1;
    }

    Ok(report)
}
