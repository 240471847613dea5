use crate::core::report::{write_json, write_top_summary, JsonReport};
use crate::core::{counter, render};
use crate::core::{Analysis, ConfigProvider, Document, Pipeline, RenderReport, TextSource};
use crate::domain::model::OutputFormat;
use crate::utils::error::Result;
use std::io::Write;

pub struct FrequencyPipeline<S: TextSource, C: ConfigProvider> {
    source: S,
    config: C,
}

impl<S: TextSource, C: ConfigProvider> FrequencyPipeline<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self { source, config }
    }
}

impl<S: TextSource, C: ConfigProvider> Pipeline for FrequencyPipeline<S, C> {
    fn extract(&self) -> Result<Document> {
        let path = self.config.input_path();
        tracing::debug!("Reading input file: {}", path);

        let text = self.source.read_text(path)?;

        Ok(Document {
            path: path.to_string(),
            text,
        })
    }

    fn transform(&self, document: Document) -> Result<Analysis> {
        let counts = counter::count_words(&document.text);
        if counts.is_empty() {
            tracing::warn!("⚠️ No words found in {}", document.path);
        }

        Ok(Analysis { document, counts })
    }

    fn load(&self, analysis: Analysis, out: &mut dyn Write) -> Result<RenderReport> {
        let thresholds = self.config.thresholds();
        let max_lines = self.config.line_limit();

        let report = match self.config.output_format() {
            OutputFormat::Text => {
                let theme = render::theme_for(self.config.color_mode(), self.config.palette());
                let report = render::render_preview(
                    &analysis.document.text,
                    &analysis.counts,
                    thresholds,
                    &theme,
                    max_lines,
                    &mut *out,
                )?;
                write_top_summary(&analysis.counts, self.config.top(), &mut *out)?;
                report
            }
            OutputFormat::Json => {
                let json = JsonReport::build(&analysis, thresholds, max_lines, self.config.top());
                write_json(&json, &mut *out)?;
                json.render_report()
            }
        };

        out.flush()?;
        Ok(report)
    }
}
