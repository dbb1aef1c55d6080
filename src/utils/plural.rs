//! Pluralization for log and report lines.

/// `""` for exactly one, `"s"` otherwise.
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, e.g. `plural_count(3, "entry file")` -> `"3 entry files"`.
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{count} {noun}{}", plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "entry file"), "0 entry files");
        assert_eq!(plural_count(1, "file"), "1 file");
        assert_eq!(plural_count(12, "post"), "12 posts");
    }
}
