//! Property-name resolution for `\p{...}`, `\P{...}` and `[:...:]`.
//!
//! Names are matched loosely: case, spaces, hyphens and underscores are
//! ignored. Resolution tries, in order: general categories and their long
//! aliases, scripts, binary properties and POSIX class names, the special
//! names `word` and `all`, `In<Block>` block properties, `Is<X>` with the
//! Java renames, and finally the `java*` compatibility names. Anything
//! else is a [`ErrorKind::PropertySyntax`] failure.

use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_script::{Script, UnicodeScript};
use urex_util::ErrorKind;

use crate::blocks::block_range;
use crate::set::CodePointSet;
use crate::CODE_POINT_LIMIT;

/// Resolves a property name to the set of code points having it.
///
/// The caller applies any outer negation (`\P{...}`, `[:^...:]`);
/// only `Is Assigned` negates internally.
pub fn set_for_property(name: &str) -> Result<CodePointSet, ErrorKind> {
    let norm = normalize(name);
    if norm.is_empty() {
        return Err(ErrorKind::PropertySyntax);
    }
    if let Some(set) = core_property(&norm) {
        return Ok(set);
    }
    match norm.as_str() {
        "word" => return Ok(word_set()),
        "all" | "any" => return Ok(CodePointSet::all()),
        _ => {}
    }
    if let Some(rest) = norm.strip_prefix("in") {
        if let Some((lo, hi)) = block_range(rest) {
            return Ok(CodePointSet::from_range(lo, hi));
        }
    }
    if let Some(rest) = norm.strip_prefix("is") {
        // Two Java renames, then the plain property name.
        if rest == "assigned" {
            let mut set = category_set(&[GeneralCategory::Unassigned]);
            set.complement();
            return Ok(set);
        }
        if rest == "titlecase" {
            return Ok(category_set(&[GeneralCategory::TitlecaseLetter]));
        }
        if let Some(set) = core_property(rest) {
            return Ok(set);
        }
    }
    if let Some(set) = java_property(&norm) {
        return Ok(set);
    }
    Err(ErrorKind::PropertySyntax)
}

/// Strips separators and lowercases for loose matching.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '\t' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// General categories, scripts, binary properties, POSIX names.
fn core_property(norm: &str) -> Option<CodePointSet> {
    if let Some(set) = general_category_set(norm) {
        return Some(set);
    }
    if let Some(set) = binary_or_posix(norm) {
        return Some(set);
    }
    script_set(norm)
}

fn general_category_set(norm: &str) -> Option<CodePointSet> {
    use GeneralCategory::*;
    let cats: &[GeneralCategory] = match norm {
        "lu" | "uppercaseletter" => &[UppercaseLetter],
        "ll" | "lowercaseletter" => &[LowercaseLetter],
        "lt" | "titlecaseletter" => &[TitlecaseLetter],
        "lm" | "modifierletter" => &[ModifierLetter],
        "lo" | "otherletter" => &[OtherLetter],
        "l" | "letter" => &[
            UppercaseLetter,
            LowercaseLetter,
            TitlecaseLetter,
            ModifierLetter,
            OtherLetter,
        ],
        "mn" | "nonspacingmark" => &[NonspacingMark],
        "mc" | "spacingmark" | "spacingcombiningmark" => &[SpacingMark],
        "me" | "enclosingmark" => &[EnclosingMark],
        "m" | "mark" | "combiningmark" => &[NonspacingMark, SpacingMark, EnclosingMark],
        "nd" | "decimalnumber" | "decimaldigitnumber" | "digit" => &[DecimalNumber],
        "nl" | "letternumber" => &[LetterNumber],
        "no" | "othernumber" => &[OtherNumber],
        "n" | "number" => &[DecimalNumber, LetterNumber, OtherNumber],
        "pc" | "connectorpunctuation" => &[ConnectorPunctuation],
        "pd" | "dashpunctuation" => &[DashPunctuation],
        "ps" | "openpunctuation" => &[OpenPunctuation],
        "pe" | "closepunctuation" => &[ClosePunctuation],
        "pi" | "initialpunctuation" => &[InitialPunctuation],
        "pf" | "finalpunctuation" => &[FinalPunctuation],
        "po" | "otherpunctuation" => &[OtherPunctuation],
        "p" | "punctuation" | "punct" => &[
            ConnectorPunctuation,
            DashPunctuation,
            OpenPunctuation,
            ClosePunctuation,
            InitialPunctuation,
            FinalPunctuation,
            OtherPunctuation,
        ],
        "sm" | "mathsymbol" => &[MathSymbol],
        "sc" | "currencysymbol" => &[CurrencySymbol],
        "sk" | "modifiersymbol" => &[ModifierSymbol],
        "so" | "othersymbol" => &[OtherSymbol],
        "s" | "symbol" => &[MathSymbol, CurrencySymbol, ModifierSymbol, OtherSymbol],
        "zs" | "spaceseparator" => &[SpaceSeparator],
        "zl" | "lineseparator" => &[LineSeparator],
        "zp" | "paragraphseparator" => &[ParagraphSeparator],
        "z" | "separator" => &[SpaceSeparator, LineSeparator, ParagraphSeparator],
        "cc" | "control" => &[Control],
        "cf" | "format" => &[Format],
        "co" | "privateuse" => &[PrivateUse],
        "cn" | "unassigned" => &[Unassigned],
        "cs" | "surrogate" => {
            return Some(CodePointSet::from_range(0xD800, 0xDFFF));
        }
        "c" | "other" => {
            let mut set = category_set(&[Control, Format, PrivateUse, Unassigned]);
            set.add_range(0xD800, 0xDFFF);
            return Some(set);
        }
        _ => return None,
    };
    Some(category_set(cats))
}

fn binary_or_posix(norm: &str) -> Option<CodePointSet> {
    let set = match norm {
        "whitespace" | "space" | "isspace" => scan(|c| c.is_whitespace()),
        "alphabetic" | "alpha" => scan(|c| c.is_alphabetic()),
        "uppercase" | "upper" => scan(|c| c.is_uppercase()),
        "lowercase" | "lower" => scan(|c| c.is_lowercase()),
        "alnum" => scan(|c| c.is_alphabetic() || gc(c) == GeneralCategory::DecimalNumber),
        "xdigit" => {
            let mut s = CodePointSet::new();
            s.add_range('0' as u32, '9' as u32);
            s.add_range('A' as u32, 'F' as u32);
            s.add_range('a' as u32, 'f' as u32);
            // Fullwidth forms.
            s.add_range(0xFF10, 0xFF19);
            s.add_range(0xFF21, 0xFF26);
            s.add_range(0xFF41, 0xFF46);
            s
        }
        "blank" => {
            let mut s = category_set(&[GeneralCategory::SpaceSeparator]);
            s.add('\t' as u32);
            s
        }
        "cntrl" => category_set(&[GeneralCategory::Control]),
        "graph" => {
            let mut invisible = category_set(&[
                GeneralCategory::SpaceSeparator,
                GeneralCategory::LineSeparator,
                GeneralCategory::ParagraphSeparator,
                GeneralCategory::Control,
                GeneralCategory::Format,
                GeneralCategory::Unassigned,
            ]);
            invisible.add_range(0xD800, 0xDFFF);
            invisible.complement();
            invisible
        }
        "print" => {
            let mut s = binary_or_posix("graph")?;
            s.add_all(&category_set(&[GeneralCategory::SpaceSeparator]));
            s
        }
        "ascii" => CodePointSet::from_range(0, 0x7F),
        _ => return None,
    };
    Some(set)
}

fn script_set(norm: &str) -> Option<CodePointSet> {
    // Script lookup wants canonical names; probe the common spellings the
    // loose-matched input could have come from.
    let mut candidates = Vec::with_capacity(3);
    candidates.push(norm.to_string());
    let mut title = String::with_capacity(norm.len());
    let mut chars = norm.chars();
    if let Some(first) = chars.next() {
        title.extend(first.to_uppercase());
        title.extend(chars);
        candidates.push(title);
    }
    candidates.push(norm.to_uppercase());
    let script = candidates.iter().find_map(|cand| {
        Script::from_full_name(cand).or_else(|| Script::from_short_name(cand))
    })?;
    Some(scan(move |c| c.script() == script))
}

/// The `\w`-style word set: alphabetic, marks, decimal digits, connector
/// punctuation, and the zero-width (non-)joiners.
pub fn word_set() -> CodePointSet {
    let mut set = scan(|c| {
        c.is_alphabetic()
            || matches!(
                gc(c),
                GeneralCategory::NonspacingMark
                    | GeneralCategory::SpacingMark
                    | GeneralCategory::EnclosingMark
                    | GeneralCategory::DecimalNumber
                    | GeneralCategory::ConnectorPunctuation
            )
    });
    set.add(0x200C);
    set.add(0x200D);
    set
}

fn java_property(norm: &str) -> Option<CodePointSet> {
    use GeneralCategory::*;
    let set = match norm {
        "javadefined" => {
            let mut s = category_set(&[Unassigned]);
            s.complement();
            s.add_range(0xD800, 0xDFFF);
            s
        }
        "javadigit" => category_set(&[DecimalNumber]),
        "javaidentifierignorable" => {
            let mut s = category_set(&[Format]);
            s.add_range(0, 8);
            s.add_range(0x0E, 0x1B);
            s.add_range(0x7F, 0x9F);
            s
        }
        "javaisocontrol" => {
            let mut s = CodePointSet::new();
            s.add_range(0, 0x1F);
            s.add_range(0x7F, 0x9F);
            s
        }
        "javajavaidentifierpart" => {
            let mut s = category_set(&[
                UppercaseLetter,
                LowercaseLetter,
                TitlecaseLetter,
                ModifierLetter,
                OtherLetter,
                LetterNumber,
                CurrencySymbol,
                ConnectorPunctuation,
                DecimalNumber,
                NonspacingMark,
                SpacingMark,
            ]);
            s.add_all(&java_property("javaidentifierignorable")?);
            s
        }
        "javajavaidentifierstart" => category_set(&[
            UppercaseLetter,
            LowercaseLetter,
            TitlecaseLetter,
            ModifierLetter,
            OtherLetter,
            LetterNumber,
            CurrencySymbol,
            ConnectorPunctuation,
        ]),
        "javaletter" => category_set(&[
            UppercaseLetter,
            LowercaseLetter,
            TitlecaseLetter,
            ModifierLetter,
            OtherLetter,
        ]),
        "javaletterordigit" => category_set(&[
            UppercaseLetter,
            LowercaseLetter,
            TitlecaseLetter,
            ModifierLetter,
            OtherLetter,
            DecimalNumber,
        ]),
        "javalowercase" => category_set(&[LowercaseLetter]),
        "javamirrored" => category_set(&[
            OpenPunctuation,
            ClosePunctuation,
            InitialPunctuation,
            FinalPunctuation,
        ]),
        "javaspacechar" => category_set(&[SpaceSeparator, LineSeparator, ParagraphSeparator]),
        "javasupplementarycodepoint" => CodePointSet::from_range(0x10000, 0x10FFFF),
        "javatitlecase" => category_set(&[TitlecaseLetter]),
        "javaunicodeidentifierstart" => category_set(&[
            UppercaseLetter,
            LowercaseLetter,
            TitlecaseLetter,
            ModifierLetter,
            OtherLetter,
            LetterNumber,
        ]),
        "javaunicodeidentifierpart" => {
            let mut s = category_set(&[
                UppercaseLetter,
                LowercaseLetter,
                TitlecaseLetter,
                ModifierLetter,
                OtherLetter,
                LetterNumber,
                NonspacingMark,
                SpacingMark,
                DecimalNumber,
                ConnectorPunctuation,
            ]);
            s.add_all(&java_property("javaidentifierignorable")?);
            s
        }
        "javauppercase" => category_set(&[UppercaseLetter]),
        "javavalidcodepoint" => CodePointSet::all(),
        "javawhitespace" => {
            let mut s = category_set(&[SpaceSeparator, LineSeparator, ParagraphSeparator]);
            let mut excluded = CodePointSet::new();
            excluded.add(0xA0);
            excluded.add(0x2007);
            excluded.add(0x202F);
            s.remove_all(&excluded);
            s.add_range(0x09, 0x0D);
            s.add_range(0x1C, 0x1F);
            s
        }
        _ => return None,
    };
    Some(set)
}

#[inline]
fn gc(c: char) -> GeneralCategory {
    get_general_category(c)
}

/// Union of the given general categories.
pub(crate) fn category_set(cats: &[GeneralCategory]) -> CodePointSet {
    scan(|c| cats.contains(&gc(c)))
}

/// Scans the whole code-point range, collecting runs where `pred` holds.
/// Surrogate code points are never members.
pub(crate) fn scan(pred: impl Fn(char) -> bool) -> CodePointSet {
    let mut list = Vec::new();
    let mut run_start: Option<u32> = None;
    for cp in 0..CODE_POINT_LIMIT {
        let member = char::from_u32(cp).map(&pred).unwrap_or(false);
        match (member, run_start) {
            (true, None) => run_start = Some(cp),
            (false, Some(start)) => {
                list.push(start);
                list.push(cp);
                run_start = None;
            }
            _ => {}
        }
    }
    if let Some(start) = run_start {
        list.push(start);
        list.push(CODE_POINT_LIMIT);
    }
    CodePointSet::from_sorted_boundaries(list)
}
