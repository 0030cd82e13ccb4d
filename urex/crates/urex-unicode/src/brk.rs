//! Grapheme-cluster and word-break services.
//!
//! `\X` advances by one extended grapheme cluster; `\b` in Unicode-word mode
//! tests word-break boundaries. Both delegate to `unicode-segmentation`.
//! Word boundaries are computed once per input text and cached, since a
//! single match attempt may probe many positions.

use unicode_segmentation::UnicodeSegmentation;

/// Byte offset of the grapheme-cluster boundary following `pos`, or `None`
/// at or past the end of `text`. `pos` must lie on a char boundary.
pub fn next_grapheme_boundary(text: &str, pos: usize) -> Option<usize> {
    if pos >= text.len() {
        return None;
    }
    text[pos..]
        .graphemes(true)
        .next()
        .map(|g| pos + g.len())
}

/// Word-break boundaries of one text, precomputed.
#[derive(Debug, Clone)]
pub struct WordBreaks {
    /// Sorted byte offsets of every boundary, including 0 and `text.len()`.
    boundaries: Vec<usize>,
}

impl WordBreaks {
    /// Segments `text` and records its word-bound offsets.
    pub fn new(text: &str) -> Self {
        let mut boundaries: Vec<usize> =
            text.split_word_bound_indices().map(|(i, _)| i).collect();
        boundaries.push(text.len());
        boundaries.dedup();
        Self { boundaries }
    }

    /// True if `pos` is a word-break boundary.
    pub fn is_boundary(&self, pos: usize) -> bool {
        self.boundaries.binary_search(&pos).is_ok()
    }

    /// The first boundary strictly after `pos`, or `None`.
    pub fn following(&self, pos: usize) -> Option<usize> {
        let idx = self.boundaries.partition_point(|&b| b <= pos);
        self.boundaries.get(idx).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grapheme_step_ascii() {
        assert_eq!(next_grapheme_boundary("abc", 0), Some(1));
        assert_eq!(next_grapheme_boundary("abc", 2), Some(3));
        assert_eq!(next_grapheme_boundary("abc", 3), None);
    }

    #[test]
    fn test_grapheme_step_combining() {
        // 'e' + COMBINING ACUTE is one cluster of three bytes.
        let s = "e\u{0301}x";
        assert_eq!(next_grapheme_boundary(s, 0), Some(3));
        assert_eq!(next_grapheme_boundary(s, 3), Some(4));
    }

    #[test]
    fn test_word_breaks() {
        let wb = WordBreaks::new("ab cd");
        assert!(wb.is_boundary(0));
        assert!(wb.is_boundary(2));
        assert!(wb.is_boundary(3));
        assert!(wb.is_boundary(5));
        assert!(!wb.is_boundary(1));
        assert_eq!(wb.following(0), Some(2));
        assert_eq!(wb.following(4), Some(5));
        assert_eq!(wb.following(5), None);
    }
}
