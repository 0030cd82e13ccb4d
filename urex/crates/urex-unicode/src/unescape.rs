//! Escape-sequence decoding.
//!
//! Decodes the standard character escapes that can appear after a backslash
//! in a pattern: `\a \e \f \n \r \t \v \b`, hex and Unicode forms
//! `\xNN \x{...} \uXXXX \UXXXXXXXX`, and control escapes `\cX`. Octal
//! escapes (`\0nnn`) and the regex-significant letters (`\d`, `\w`, ...)
//! are the pattern scanner's business, not this module's.

/// Result of decoding one escape: the code point and the number of bytes of
/// `text` consumed (starting at the escape letter, backslash excluded).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unescaped {
    pub cp: u32,
    pub consumed: usize,
}

/// Decodes the escape starting at `text[0]`, which is the character right
/// after a backslash. Returns `None` when the sequence is malformed or not
/// a character escape at all.
pub fn unescape_at(text: &str) -> Option<Unescaped> {
    let mut chars = text.chars();
    let key = chars.next()?;
    let simple = |cp: u32| {
        Some(Unescaped {
            cp,
            consumed: key.len_utf8(),
        })
    };
    match key {
        'a' => simple(0x07),
        'b' => simple(0x08),
        'e' => simple(0x1B),
        'f' => simple(0x0C),
        'n' => simple(0x0A),
        'r' => simple(0x0D),
        't' => simple(0x09),
        'v' => simple(0x0B),
        'x' => {
            if chars.clone().next() == Some('{') {
                let body = &text[2..];
                let close = body.find('}')?;
                let digits = &body[..close];
                if digits.is_empty() || digits.len() > 6 {
                    return None;
                }
                let cp = u32::from_str_radix(digits, 16).ok()?;
                valid(cp).map(|cp| Unescaped {
                    cp,
                    consumed: 2 + close + 1,
                })
            } else {
                hex_fixed(&text[1..], 2).map(|cp| Unescaped { cp, consumed: 3 })
            }
        }
        'u' => hex_fixed(&text[1..], 4).map(|cp| Unescaped { cp, consumed: 5 }),
        'U' => {
            let cp = hex_fixed(&text[1..], 8)?;
            Some(Unescaped { cp, consumed: 9 })
        }
        'c' => {
            let ctl = chars.next()?;
            if !ctl.is_ascii() {
                return None;
            }
            Some(Unescaped {
                cp: (ctl as u32) & 0x1F,
                consumed: 1 + ctl.len_utf8(),
            })
        }
        _ => None,
    }
}

/// Exactly `n` ASCII hex digits, or `None`.
fn hex_fixed(text: &str, n: usize) -> Option<u32> {
    if text.len() < n || !text.is_char_boundary(n) {
        return None;
    }
    let digits = &text[..n];
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    valid(u32::from_str_radix(digits, 16).ok()?)
}

fn valid(cp: u32) -> Option<u32> {
    (cp <= 0x10_FFFF).then_some(cp)
}
