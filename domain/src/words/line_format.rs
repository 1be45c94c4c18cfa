//! Text-level operations on pool file contents.
//!
//! These work on the whole file body so the stores stay dumb: read the text,
//! hand it here, write back what comes out.

use super::pair::WordPair;

/// Parse every valid pair in file order. Invalid lines are skipped.
pub fn parse_pairs(contents: &str, separator: char) -> Vec<WordPair> {
    contents
        .lines()
        .filter_map(|line| WordPair::parse_line(line, separator))
        .collect()
}

/// Count non-blank, non-comment lines that did not yield a pair.
pub fn count_rejected_lines(contents: &str, separator: char) -> usize {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(super::pair::COMMENT_PREFIX))
        .filter(|line| WordPair::parse_line(line, separator).is_none())
        .count()
}

/// Remove the first line holding `pair`.
///
/// Returns the rewritten contents, or `None` when no line matches. All other
/// lines (comments and blanks included) are kept verbatim. The result ends
/// with a newline unless it is empty.
pub fn remove_first_match(contents: &str, pair: &WordPair, separator: char) -> Option<String> {
    let lines: Vec<&str> = contents.lines().collect();
    let position = lines
        .iter()
        .position(|line| pair.matches_line(line, separator))?;

    let mut rewritten = String::with_capacity(contents.len());
    for (index, line) in lines.iter().enumerate() {
        if index == position {
            continue;
        }
        rewritten.push_str(line);
        rewritten.push('\n');
    }
    Some(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "# 动物\n猫,狗\n\n苹果,香蕉\n坏行\n猫,狗\n";

    fn pair(a: &str, b: &str) -> WordPair {
        WordPair::new(a, b).unwrap()
    }

    #[test]
    fn test_parse_pairs_keeps_file_order_and_duplicates() {
        let pairs = parse_pairs(SAMPLE, ',');
        assert_eq!(
            pairs,
            vec![pair("猫", "狗"), pair("苹果", "香蕉"), pair("猫", "狗")]
        );
    }

    #[test]
    fn test_count_rejected_lines() {
        assert_eq!(count_rejected_lines(SAMPLE, ','), 1);
        assert_eq!(count_rejected_lines("猫,狗\n", ','), 0);
    }

    #[test]
    fn test_remove_first_match_only_removes_one() {
        let rewritten = remove_first_match(SAMPLE, &pair("猫", "狗"), ',').unwrap();
        assert_eq!(rewritten, "# 动物\n\n苹果,香蕉\n坏行\n猫,狗\n");
    }

    #[test]
    fn test_remove_first_match_tolerates_spacing() {
        let rewritten = remove_first_match("苹果 , 香蕉\n", &pair("苹果", "香蕉"), ',').unwrap();
        assert_eq!(rewritten, "");
    }

    #[test]
    fn test_remove_first_match_missing_returns_none() {
        assert!(remove_first_match(SAMPLE, &pair("狗", "猫"), ',').is_none());
        assert!(remove_first_match("", &pair("猫", "狗"), ',').is_none());
    }

    #[test]
    fn test_remove_first_match_adds_trailing_newline() {
        let rewritten = remove_first_match("猫,狗\n苹果,香蕉", &pair("猫", "狗"), ',').unwrap();
        assert_eq!(rewritten, "苹果,香蕉\n");
    }

    #[test]
    fn test_comment_line_is_never_removed() {
        let rewritten = remove_first_match("#猫,狗\n猫,狗\n", &pair("猫", "狗"), ',').unwrap();
        assert_eq!(rewritten, "#猫,狗\n");
    }
}
