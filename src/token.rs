//! Token types for assembled expressions.

use std::fmt;

/// One rendered fragment of the expression together with its kind.
///
/// The kind is what the sequence looks at when it decides whether to close a
/// pending alternation or rewrite a quantifier; the text is never inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub(crate) text: String,
    pub(crate) kind: TokenKind,
}

impl Token {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn atom(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: TokenKind::Atom,
        }
    }

    pub fn quantifier(rep: Repetition) -> Self {
        Self {
            text: rep.to_string(),
            kind: TokenKind::Quantifier(rep),
        }
    }

    pub(crate) fn with_kind(text: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `(?:` opening an alternation group. Always followed by its first branch.
    OpenGroup,
    /// `(?:foo` or `)|(?:bar`: a branch whose group is still open.
    OpenBranch,
    /// `)` ending a branch. The alternation group stays open.
    ClosedBranch,
    /// Synthetic `)` or `))` that ends an alternation group.
    ClosedGroup,
    /// Repetition suffix applying to the preceding token.
    Quantifier(Repetition),
    /// Groups, classes, lookaheads, captures.
    Atom,
}

impl TokenKind {
    pub fn is_quantifier(self) -> bool {
        matches!(self, TokenKind::Quantifier(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repetition {
    OneOrMore,
    ZeroOrMore,
    Optional,
    Exactly(usize),
    AtLeast(usize),
    Between(usize, usize),
}

impl Repetition {
    /// Resolve the `limit(min, max)` policy.
    ///
    /// A missing or zero `max` means exactly `min`; a `max` below `min` leaves
    /// the upper bound open.
    pub fn limit(min: usize, max: Option<usize>) -> Self {
        match max {
            None | Some(0) => Repetition::Exactly(min),
            Some(max) if max < min => Repetition::AtLeast(min),
            Some(max) => Repetition::Between(min, max),
        }
    }
}

impl fmt::Display for Repetition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Repetition::OneOrMore => write!(f, "+"),
            Repetition::ZeroOrMore => write!(f, "*"),
            Repetition::Optional => write!(f, "?"),
            Repetition::Exactly(n) => write!(f, "{{{n}}}"),
            Repetition::AtLeast(n) => write!(f, "{{{n},}}"),
            Repetition::Between(min, max) => write!(f, "{{{min},{max}}}"),
        }
    }
}
