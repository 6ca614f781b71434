//! A parsed program ready for evaluation.

use crate::{Block, StringInterner};

/// Root block of a program plus the interner that named its identifiers.
///
/// The evaluator needs the interner to render identifier names in errors.
pub struct Program {
    pub root: Block,
    pub interner: StringInterner,
}

impl Program {
    pub fn new(root: Block, interner: StringInterner) -> Self {
        Program { root, interner }
    }
}
