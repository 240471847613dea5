use crate::core::render::{preview_lines, styled_words, StyledWord};
use crate::domain::model::{Analysis, CategoryTally, RenderReport, Thresholds, TopWord, WordCounts};
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub file: &'a str,
    pub total_words: usize,
    pub distinct_words: usize,
    pub lines: Vec<Vec<StyledWord<'a>>>,
    pub top: Vec<TopWord>,
}

impl<'a> JsonReport<'a> {
    pub fn build(analysis: &'a Analysis, thresholds: Thresholds, max_lines: usize, top: usize) -> Self {
        let lines = preview_lines(&analysis.document.text, max_lines)
            .map(|line| styled_words(line, &analysis.counts, thresholds))
            .collect();

        Self {
            file: &analysis.document.path,
            total_words: analysis.counts.total(),
            distinct_words: analysis.counts.distinct(),
            lines,
            top: analysis.counts.top(top),
        }
    }

    pub fn render_report(&self) -> RenderReport {
        let mut tally = CategoryTally::default();
        for word in self.lines.iter().flatten() {
            tally.record(word.category);
        }
        RenderReport {
            lines_rendered: self.lines.len(),
            tally,
        }
    }
}

pub fn write_json<W: Write + ?Sized>(report: &JsonReport<'_>, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// 預覽後的頻率摘要：`--` 分隔線，接著每行 `次數<TAB>單字`
pub fn write_top_summary<W: Write + ?Sized>(counts: &WordCounts, n: usize, out: &mut W) -> Result<()> {
    if n == 0 {
        return Ok(());
    }

    writeln!(out, "--")?;
    for entry in counts.top(n) {
        writeln!(out, "{}\t{}", entry.count, entry.word)?;
    }
    Ok(())
}
