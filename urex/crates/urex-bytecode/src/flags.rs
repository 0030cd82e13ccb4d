//! Match-mode flags.

use bitflags::bitflags;

bitflags! {
    /// Pattern compilation and match modes. All off by default.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Flags: u32 {
        /// Only LF is a line terminator for `.`, `^`, `$`.
        const UNIX_LINES = 0x01;
        /// Full Unicode case folding on literals, strings, sets, backrefs.
        const CASE_INSENSITIVE = 0x02;
        /// Free-spacing mode with `#` end-of-line comments.
        const COMMENTS = 0x04;
        /// `^` and `$` match at every line boundary.
        const MULTILINE = 0x08;
        /// The whole pattern is literal text.
        const LITERAL = 0x10;
        /// `.` matches line terminators.
        const DOTALL = 0x20;
        /// `\b` uses word-break iteration.
        const UWORD = 0x100;
        /// Unknown ASCII-letter escapes are an error instead of literals.
        const ERROR_ON_UNKNOWN_ESCAPES = 0x200;
    }
}

impl Flags {
    /// Flags that `(?ismwx-...)` groups may toggle mid-pattern.
    pub fn inline_togglable() -> Flags {
        Flags::CASE_INSENSITIVE
            | Flags::COMMENTS
            | Flags::DOTALL
            | Flags::MULTILINE
            | Flags::UNIX_LINES
            | Flags::UWORD
    }
}
