use crate::domain::model::{ColorCategory, Thresholds};

pub fn classify(count: usize, thresholds: Thresholds) -> ColorCategory {
    match count {
        0 => ColorCategory::Unseen,
        1 => ColorCategory::Singleton,
        n if n <= thresholds.low_max => ColorCategory::Low,
        _ => ColorCategory::High,
    }
}
