//! The compiled pattern.

use std::fmt::Write as _;
use std::sync::Arc;

use indexmap::IndexMap;
use urex_unicode::CodePointSet;

use crate::flags::Flags;
use crate::opcode::{Inst, Opcode};

/// Sentinel minimum-match length of a pattern that can never match.
pub const MIN_LEN_UNREACHABLE: i32 = i32::MAX;

/// The find loop's pre-computed starting strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartType {
    /// No usable information; try every code-point boundary.
    #[default]
    NoInfo,
    /// Anchored; try only the region start.
    Start,
    /// Try the region start and after every line terminator.
    Line,
    /// Try positions holding one specific code point.
    Char,
    /// Try positions holding the first char of a known literal prefix.
    String,
    /// Try positions holding a member of `initial_chars`.
    Set,
}

/// A compiled regular expression. Immutable once built; share with `Arc`.
#[derive(Debug, Clone)]
pub struct Pattern {
    /// Original pattern text.
    pub source: String,
    /// Flags in force at compile start.
    pub flags: Flags,
    /// The instruction stream.
    pub compiled_code: Vec<Inst>,
    /// Pool of literal text referenced by string opcodes.
    pub literal_text: String,
    /// Pool of interned code-point sets referenced by `Setref`.
    pub set_pool: Vec<Arc<CodePointSet>>,
    /// Element g-1 is the frame slot where group g's capture triple starts.
    pub group_map: Vec<i32>,
    /// Capture-group names in declaration order, mapped to group numbers.
    pub named_capture_map: IndexMap<String, usize>,
    /// Size of the matcher's process-wide data area.
    pub data_size: usize,
    /// Width of one backtracking frame, header included.
    pub frame_size: usize,
    /// Lower bound on the input length of any match.
    pub min_match_len: i32,
    /// Find-loop strategy.
    pub start_type: StartType,
    /// Possible first code points, for `StartType::Set` (and `Char`).
    pub initial_chars: Arc<CodePointSet>,
    /// The single initial code point, for `StartType::Char`.
    pub initial_char: u32,
    /// Literal-pool slice of the initial string, for `StartType::String`.
    pub initial_string_idx: usize,
    pub initial_string_len: usize,
    /// True when a back reference survived optimization; the matcher keeps
    /// the input alive in a form backrefs can re-read.
    pub needs_alt_input: bool,
}

impl Pattern {
    /// Number of capture groups (group 0 excluded).
    pub fn group_count(&self) -> usize {
        self.group_map.len()
    }

    /// The group number for a name, if the pattern declares it.
    pub fn group_number_for_name(&self, name: &str) -> Option<usize> {
        self.named_capture_map.get(name).copied()
    }

    /// Renders the program one instruction per line, for debugging.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "pattern: {}", self.source);
        let _ = writeln!(
            out,
            "groups: {}  frame: {}  data: {}  minlen: {}  start: {:?}",
            self.group_count(),
            self.frame_size,
            self.data_size,
            self.min_match_len,
            self.start_type
        );
        let mut i = 0;
        while i < self.compiled_code.len() {
            let inst = self.compiled_code[i];
            let _ = write!(out, "{i:4}  {:?}", inst.op());
            match inst.op() {
                Opcode::OneChar | Opcode::OneCharI => {
                    let c = char::from_u32(inst.operand() as u32).unwrap_or('\u{FFFD}');
                    let _ = write!(out, " '{c}'");
                }
                Opcode::String | Opcode::StringI => {
                    let start = inst.operand() as usize;
                    let len = self.compiled_code[i + 1].operand() as usize;
                    let text: String = self.literal_text[start..].chars().take(len).collect();
                    let _ = write!(out, " \"{text}\"");
                    let _ = writeln!(out);
                    i += 2;
                    continue;
                }
                Opcode::CtrInit | Opcode::CtrInitNg => {
                    let end = self.compiled_code[i + 1].operand();
                    let min = self.compiled_code[i + 2].as_raw();
                    let max = self.compiled_code[i + 3].as_raw();
                    let _ = write!(out, " slot={} end={} min={} max={}", inst.operand(), end, min, max);
                    let _ = writeln!(out);
                    i += 4;
                    continue;
                }
                _ => {
                    let _ = write!(out, " {}", inst.operand());
                }
            }
            let _ = writeln!(out);
            i += 1;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_pattern() -> Pattern {
        Pattern {
            source: "ab".into(),
            flags: Flags::empty(),
            compiled_code: vec![
                Inst::new(Opcode::String, 0),
                Inst::new(Opcode::StringLen, 2),
                Inst::new(Opcode::End, 0),
            ],
            literal_text: "ab".into(),
            set_pool: Vec::new(),
            group_map: Vec::new(),
            named_capture_map: IndexMap::new(),
            data_size: 0,
            frame_size: 2,
            min_match_len: 2,
            start_type: StartType::String,
            initial_chars: CodePointSet::new().freeze(),
            initial_char: 0,
            initial_string_idx: 0,
            initial_string_len: 2,
            needs_alt_input: false,
        }
    }

    #[test]
    fn test_dump_lists_instructions() {
        let text = tiny_pattern().dump();
        assert!(text.contains("String \"ab\""));
        assert!(text.contains("End"));
    }

    #[test]
    fn test_group_lookup() {
        let mut p = tiny_pattern();
        p.group_map = vec![2, 5];
        p.named_capture_map.insert("year".into(), 2);
        assert_eq!(p.group_count(), 2);
        assert_eq!(p.group_number_for_name("year"), Some(2));
        assert_eq!(p.group_number_for_name("month"), None);
    }
}
