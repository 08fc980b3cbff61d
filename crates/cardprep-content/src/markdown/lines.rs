//! Splitting documents into lines and back.

/// Split text into owned lines.
///
/// Accepts both `\n` and `\r\n` endings. A trailing newline produces a final
/// empty line, so [`join_lines`] gives the text back with `\n` endings.
///
/// ```rust
/// use cardprep_content::markdown::lines::split_lines;
///
/// assert_eq!(split_lines("a\r\nb\n"), vec!["a", "b", ""]);
/// assert_eq!(split_lines(""), vec![""]);
/// ```
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

/// Join lines with bare `\n`.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut text = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            text.push('\n');
        }
        text.push_str(line.as_ref());
    }
    text
}

/// `true` for empty or whitespace-only lines.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_crlf_and_lf() {
        assert_eq!(split_lines("a\r\nb\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_join_normalizes_endings() {
        let lines = split_lines("a\r\nb\r\n");
        assert_eq!(join_lines(&lines), "a\nb\n");
    }

    #[test]
    fn test_lone_carriage_return_is_kept_inside_line() {
        assert_eq!(split_lines("a\rb"), vec!["a\rb"]);
    }

    #[test]
    fn test_round_trip_lf_text() {
        let text = "---\ntitle: x\n---\n\n# Heading\n";
        assert_eq!(join_lines(&split_lines(text)), text);
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" "));
        assert!(is_blank("\t  "));
        assert!(!is_blank(" x "));
    }
}
