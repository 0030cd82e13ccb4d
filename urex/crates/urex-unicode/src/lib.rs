//! urex-unicode - Unicode services for the urex engine
//!
//! The compiler and matcher consume Unicode data through this crate and
//! nowhere else: code-point sets with set algebra, property-name resolution
//! for `\p{...}` and `[:...:]`, full case folding, grapheme and word break
//! iteration, escape-sequence decoding, and the lazily built predefined sets
//! the parser table and the matcher's static-set opcodes refer to.
//!
//! Everything here is immutable once built. Frozen sets are `Arc`-shared;
//! the predefined tables are `once_cell` lazies initialized on first touch
//! and handed out by reference.

pub mod brk;
pub mod fold;
pub mod props;
pub mod set;
pub mod static_sets;
pub mod unescape;

mod blocks;

pub use fold::{fold_char, fold_str, FoldedChar, StrFoldIter};
pub use set::CodePointSet;

/// One past the largest Unicode code point.
pub const CODE_POINT_LIMIT: u32 = 0x11_0000;

/// The largest Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10_FFFF;
