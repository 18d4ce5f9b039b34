//! Wording for status messages

/// `word` with an `s` appended unless `count` is exactly one
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// `count` followed by `word` in agreement: `1 line`, `0 devices`
pub fn counted(count: usize, word: &str) -> String {
    format!("{count} {}", pluralize(word, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("line", 0), "lines");
        assert_eq!(pluralize("line", 1), "line");
        assert_eq!(pluralize("device", 6), "devices");
    }

    #[test]
    fn test_counted() {
        assert_eq!(counted(1, "device"), "1 device");
        assert_eq!(counted(8, "line"), "8 lines");
    }
}
