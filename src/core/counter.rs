use crate::core::tokenizer;
use crate::domain::model::WordCounts;

/// 統計整份文件 (不只是預覽的行) 的單字次數
pub fn count_words(text: &str) -> WordCounts {
    let mut counts = WordCounts::new();
    for word in tokenizer::words(text) {
        counts.add(tokenizer::normalize(word));
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_are_case_insensitive() {
        let counts = count_words("The people, the PEOPLE and The Laws");
        assert_eq!(counts.get("the"), 3);
        assert_eq!(counts.get("people"), 2);
        assert_eq!(counts.get("laws"), 1);
        assert_eq!(counts.total(), 7);
        assert_eq!(counts.distinct(), 4);
    }

    #[test]
    fn test_counts_span_every_line() {
        let mut text = String::new();
        for _ in 0..30 {
            text.push_str("liberty\n");
        }
        let counts = count_words(&text);
        assert_eq!(counts.get("liberty"), 30);
    }

    #[test]
    fn test_empty_text() {
        let counts = count_words("");
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
    }
}
