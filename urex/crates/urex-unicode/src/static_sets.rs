//! Predefined sets, built once and shared.
//!
//! Two families live here. The *rule sets* classify pattern characters for
//! the parser's transition table (character classes 128 and up). The
//! *static matcher sets* back the static-set opcodes: `\w`-ness for word
//! boundaries, whitespace, and the combining/format skip set the word
//! boundary test steps over.

use std::sync::Arc;

use once_cell::sync::Lazy;
use unicode_general_category::GeneralCategory;

use crate::props::{category_set, scan, word_set};
use crate::set::CodePointSet;

// Character classes referenced by the parser's transition table. Values
// 0..127 in a table row mean the literal ASCII character; these start
// where ASCII ends.
pub const RULE_SET_DIGIT_CHAR: u8 = 128;
pub const RULE_SET_ASCII_LETTER: u8 = 129;
pub const RULE_SET_RULE_CHAR: u8 = 130;
/// EOF sentinel class.
pub const RULE_CLASS_EOF: u8 = 253;
/// Matches any character delivered in quoted state.
pub const RULE_CLASS_QUOTED: u8 = 254;
/// Default row; always matches.
pub const RULE_CLASS_DEFAULT: u8 = 255;

static DIGIT_CHAR: Lazy<CodePointSet> =
    Lazy::new(|| CodePointSet::from_range('0' as u32, '9' as u32));

static ASCII_LETTER: Lazy<CodePointSet> = Lazy::new(|| {
    let mut s = CodePointSet::from_range('a' as u32, 'z' as u32);
    s.add_range('A' as u32, 'Z' as u32);
    s
});

/// Any character with no syntactic meaning outside a class: everything but
/// `* ? + [ ( ) { } ^ $ | \ .`
static RULE_CHAR: Lazy<CodePointSet> = Lazy::new(|| {
    let mut s = CodePointSet::new();
    for c in "*?+[(){}^$|\\.".chars() {
        s.add(c as u32);
    }
    s.complement();
    s
});

/// The rule set for a table character class.
///
/// # Panics
///
/// Panics on a class number the table never uses; the transition table is
/// static, so that is unreachable from real input.
pub fn rule_set(class: u8) -> &'static CodePointSet {
    match class {
        RULE_SET_DIGIT_CHAR => &DIGIT_CHAR,
        RULE_SET_ASCII_LETTER => &ASCII_LETTER,
        RULE_SET_RULE_CHAR => &RULE_CHAR,
        _ => unreachable!("not a rule-set class: {class}"),
    }
}

/// Index of the `\w` word set among the static matcher sets.
pub const URX_ISWORD_SET: usize = 1;
/// Index of the whitespace set.
pub const URX_ISSPACE_SET: usize = 2;
/// Index of the combining-mark/format skip set used by word boundaries.
pub const URX_MARK_FORMAT_SET: usize = 3;
/// Number of static matcher set slots (slot 0 is unused).
pub const STATIC_SET_COUNT: usize = 4;

static STATIC_SETS: Lazy<[Arc<CodePointSet>; STATIC_SET_COUNT]> = Lazy::new(|| {
    let empty = CodePointSet::new().freeze();
    let isword = word_set().freeze();
    let isspace = scan(|c| c.is_whitespace()).freeze();
    let mark_format = {
        let mut s = category_set(&[
            GeneralCategory::NonspacingMark,
            GeneralCategory::SpacingMark,
            GeneralCategory::EnclosingMark,
            GeneralCategory::Format,
            GeneralCategory::Control,
            GeneralCategory::LineSeparator,
            GeneralCategory::ParagraphSeparator,
        ]);
        // Line endings and the zero-width joiners stay visible to the
        // boundary test.
        let mut keep = CodePointSet::new();
        keep.add(0x0A);
        keep.add(0x0D);
        keep.add(0x200C);
        keep.add(0x200D);
        s.remove_all(&keep);
        s.freeze()
    };
    [empty, isword, isspace, mark_format]
});

/// The static matcher set at `idx`.
///
/// # Panics
///
/// Panics if `idx >= STATIC_SET_COUNT`; operands come from the compiler,
/// which only emits the constants above.
pub fn static_set(idx: usize) -> &'static Arc<CodePointSet> {
    &STATIC_SETS[idx]
}
