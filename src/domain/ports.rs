use crate::domain::model::{
    Analysis, ColorMode, Document, OutputFormat, Palette, RenderReport, Thresholds,
};
use crate::utils::error::Result;
use std::io::Write;

pub trait TextSource {
    fn read_text(&self, path: &str) -> Result<String>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn line_limit(&self) -> usize;
    fn thresholds(&self) -> Thresholds;
    fn palette(&self) -> &Palette;
    fn color_mode(&self) -> ColorMode;
    fn top(&self) -> usize;
    fn output_format(&self) -> OutputFormat;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Document>;
    fn transform(&self, document: Document) -> Result<Analysis>;
    fn load(&self, analysis: Analysis, out: &mut dyn Write) -> Result<RenderReport>;
}
