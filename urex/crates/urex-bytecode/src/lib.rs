//! urex-bytecode - The compiled form of a regular expression
//!
//! A pattern compiles to a flat vector of 32-bit instruction words plus a
//! handful of pools and tables: literal text, interned code-point sets, the
//! capture-group frame map, and the start-of-match metadata the find loop
//! uses to skip hopeless positions. This crate defines that representation;
//! `urex-compile` produces it and `urex-match` executes it.

pub mod flags;
pub mod opcode;
pub mod pattern;

pub use flags::Flags;
pub use opcode::{Inst, Opcode, MAX_OPERAND};
pub use pattern::{Pattern, StartType, MIN_LEN_UNREACHABLE};

/// State saves between two bumps of the matcher's time counter.
pub const TIMER_INITIAL_VALUE: i32 = 10_000;

/// Default backtracking-stack cap, in bytes.
pub const DEFAULT_STACK_LIMIT: usize = 32 * 1024 * 1024;

/// Upper bound on a pattern's process-wide data area.
pub const MAX_DATA_SIZE: usize = 0x00FF_FFF0;
