use once_cell::sync::Lazy;
use regex::Regex;

// 只認 ASCII 單字字元，其餘 (標點、空白、非 ASCII) 都是分隔符
static WORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9_]+").unwrap());

/// 依序列出文字中的單字，保留原始大小寫
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    WORD_REGEX.find_iter(text).map(|m| m.as_str())
}

pub fn normalize(word: &str) -> String {
    word.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_split_on_non_word_characters() {
        let found: Vec<&str> = words("When in the Course of human events, it becomes").collect();
        assert_eq!(
            found,
            vec!["When", "in", "the", "Course", "of", "human", "events", "it", "becomes"]
        );
    }

    #[test]
    fn test_apostrophes_and_underscores() {
        let found: Vec<&str> = words("don't snake_case 1776--July").collect();
        assert_eq!(found, vec!["don", "t", "snake_case", "1776", "July"]);
    }

    #[test]
    fn test_non_ascii_is_a_separator() {
        let found: Vec<&str> = words("café naïve").collect();
        assert_eq!(found, vec!["caf", "na", "ve"]);
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        assert_eq!(words("").count(), 0);
        assert_eq!(words(" ,.;\n\t").count(), 0);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Course"), "course");
        assert_eq!(normalize("Nature"), "nature");
        assert_eq!(normalize("Snake_Case_42"), "snake_case_42");
    }
}
