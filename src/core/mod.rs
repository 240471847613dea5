pub mod classify;
pub mod counter;
pub mod etl;
pub mod pipeline;
pub mod render;
pub mod report;
pub mod tokenizer;

pub use crate::domain::model::{Analysis, Document, RenderReport, WordCounts};
pub use crate::domain::ports::{ConfigProvider, Pipeline, TextSource};
pub use crate::utils::error::Result;
