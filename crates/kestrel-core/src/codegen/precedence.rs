//! Operator binding strengths for the C++ output.
//!
//! One total order covers every construct the expression dispatcher
//! emits. Parenthesization falls out of comparing a node's own level
//! with the level supplied by its parent; the set of operator kinds is
//! fixed at build time, so the table is a handful of constants rather
//! than a registration step.

/// Binding strength of an emitted construct. Lower is tighter; a node
/// wraps its rendered text in parentheses iff its own level is strictly
/// looser than the context it is emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Precedence(u8);

impl Precedence {
    /// Construction, member access, call.
    pub const PRIMARY: Precedence = Precedence(0);
    /// Prefix operators and cast-as.
    pub const UNARY: Precedence = Precedence(1);
    /// Left-associative `+`.
    pub const ADDITIVE: Precedence = Precedence(2);
    /// Simple and compound assignment.
    pub const ASSIGNMENT: Precedence = Precedence(3);
    /// Context of a full statement expression and of argument and
    /// right-hand-side positions; nothing is parenthesized here.
    pub const STATEMENT: Precedence = Precedence(4);

    /// One notch tighter. Used for the right operand of
    /// left-associative binaries so a same-precedence right subtree
    /// keeps its grouping when the text is read back.
    pub fn tighter(self) -> Precedence {
        Precedence(self.0.saturating_sub(1))
    }

    pub fn needs_parens(self, context: Precedence) -> bool {
        self > context
    }
}
