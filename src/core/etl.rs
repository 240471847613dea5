use crate::core::{Pipeline, RenderReport};
use crate::utils::error::Result;
use std::io::Write;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<RenderReport> {
        tracing::debug!("Starting word frequency run");

        // Extract
        let document = self.pipeline.extract()?;
        tracing::debug!("Extracted {} ({} bytes)", document.path, document.text.len());

        // Transform
        let analysis = self.pipeline.transform(document)?;
        tracing::debug!(
            "Counted {} words ({} distinct)",
            analysis.counts.total(),
            analysis.counts.distinct()
        );

        // Load
        let report = self.pipeline.load(analysis, out)?;
        tracing::debug!(
            "Rendered {} lines (singleton: {}, low: {}, high: {}, unseen: {})",
            report.lines_rendered,
            report.tally.singleton,
            report.tally.low,
            report.tally.high,
            report.tally.unseen
        );

        Ok(report)
    }
}
