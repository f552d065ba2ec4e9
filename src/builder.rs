//! The fluent expression builder.

use std::fmt;

use crate::char_class::{ClassMember, render_class};
use crate::match_mode::MatchMode;
use crate::sequence::TokenSequence;
use crate::token::{Repetition, Token};
use crate::value::Value;

const DIGIT: &str = r"(?:\d)";
const LETTER: &str = "(?:[a-zA-Z])";
const ALPHANUMERIC: &str = "(?:[a-zA-Z0-9])";
const WHITESPACE: &str = r"(?:\s)";
const LINE_BREAK: &str = r"(?:\r\n|\n)";
const ANYTHING: &str = "(?:.*)";

/// Flags prepended to every rendered pattern.
const MODE_FLAGS: &str = "(?m)";

/// A regular expression assembled from chained method calls.
///
/// Every composing method returns `&mut Self`, so calls chain:
///
/// ```rust
/// use human_regex::HumanRegex;
///
/// let mut re = HumanRegex::new();
/// re.start_of_string().find("f").digits().exactly(2).end_of_string();
/// assert_eq!(re.render(), r"(?m)^(?:f)(?:\d){2}$");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HumanRegex {
    sequence: TokenSequence,
    anchor_start: bool,
    anchor_end: bool,
    mode: MatchMode,
    backtrack_limit: Option<usize>,
}

// Constructors and configuration
impl HumanRegex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create() -> Self {
        Self::new()
    }

    /// Scan for every match instead of stopping at the first one.
    pub fn global(&mut self) -> &mut Self {
        self.mode = MatchMode::Global;
        self
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Limit the backtracking steps the engine may take per match attempt.
    pub fn backtrack_limit(&mut self, limit: usize) -> &mut Self {
        self.backtrack_limit = Some(limit);
        self
    }

    pub(crate) fn configured_backtrack_limit(&self) -> Option<usize> {
        self.backtrack_limit
    }

    pub fn tokens(&self) -> &[Token] {
        self.sequence.tokens()
    }

    /// Append a raw token to the expression.
    pub fn add(&mut self, token: Token) -> &mut Self {
        self.sequence.push(token);
        self
    }
}

// Anchors
impl HumanRegex {
    pub fn start_of_string(&mut self) -> &mut Self {
        self.anchor_start = true;
        self
    }

    pub fn end_of_string(&mut self) -> &mut Self {
        self.anchor_end = true;
        self
    }
}

// Sequencing and alternation
impl HumanRegex {
    /// Alias for [`then`](Self::then).
    pub fn find(&mut self, value: impl Into<Value>) -> &mut Self {
        self.then(value)
    }

    pub fn then(&mut self, value: impl Into<Value>) -> &mut Self {
        let pattern = value.into().into_pattern();
        self.add(Token::atom(format!("(?:{pattern})")))
    }

    /// Open an alternation whose first branch is `value`.
    pub fn either(&mut self, value: impl Into<Value>) -> &mut Self {
        let pattern = value.into().into_pattern();
        self.sequence.open_alternation(&pattern);
        self
    }

    pub fn find_either(&mut self, value: impl Into<Value>) -> &mut Self {
        self.either(value)
    }

    pub fn then_either(&mut self, value: impl Into<Value>) -> &mut Self {
        self.either(value)
    }

    /// Add a branch to the alternation opened by [`either`](Self::either).
    pub fn or(&mut self, value: impl Into<Value>) -> &mut Self {
        let pattern = value.into().into_pattern();
        self.sequence.push_branch(&pattern);
        self
    }

    /// Match any one of `values`.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn any_of<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut values = values.into_iter();
        let Some(first) = values.next() else {
            panic!("any_of needs at least one value");
        };
        self.either(first);
        for value in values {
            self.or(value);
        }
        self
    }
}

// Quantifiers
impl HumanRegex {
    /// Repeat the previous expression one or more times.
    pub fn multiple_times(&mut self) -> &mut Self {
        self.repeat(Repetition::OneOrMore)
    }

    pub fn more_than_once(&mut self) -> &mut Self {
        self.multiple_times()
    }

    pub fn zero_or_more(&mut self) -> &mut Self {
        self.repeat(Repetition::ZeroOrMore)
    }

    pub fn once(&mut self) -> &mut Self {
        self.limit(1, None)
    }

    pub fn at_least(&mut self, times: usize) -> &mut Self {
        self.repeat(Repetition::AtLeast(times))
    }

    pub fn exactly(&mut self, times: usize) -> &mut Self {
        self.repeat(Repetition::Exactly(times))
    }

    /// Limit the occurrences of the previous expression.
    ///
    /// `max` of `None` or `Some(0)` means exactly `min`; a `max` below `min`
    /// means at least `min`.
    pub fn limit(&mut self, min: usize, max: impl Into<Option<usize>>) -> &mut Self {
        self.repeat(Repetition::limit(min, max.into()))
    }

    /// Make the previous expression optional.
    pub fn optional(&mut self) -> &mut Self {
        self.repeat(Repetition::Optional)
    }

    /// Optionally match `value`.
    pub fn maybe(&mut self, value: impl Into<Value>) -> &mut Self {
        self.then(value).optional()
    }

    /// # Panics
    ///
    /// Panics if nothing has been added yet.
    fn repeat(&mut self, rep: Repetition) -> &mut Self {
        self.sequence.push_quantifier(rep);
        self
    }
}

// Character shortcuts
impl HumanRegex {
    pub fn digit(&mut self) -> &mut Self {
        self.add(Token::atom(DIGIT))
    }

    pub fn digits(&mut self) -> &mut Self {
        self.digit().multiple_times()
    }

    pub fn letter(&mut self) -> &mut Self {
        self.add(Token::atom(LETTER))
    }

    pub fn letters(&mut self) -> &mut Self {
        self.letter().multiple_times()
    }

    pub fn alphanumeric(&mut self) -> &mut Self {
        self.add(Token::atom(ALPHANUMERIC))
    }

    pub fn alphanumerics(&mut self) -> &mut Self {
        self.alphanumeric().multiple_times()
    }

    pub fn whitespace(&mut self) -> &mut Self {
        self.add(Token::atom(WHITESPACE))
    }

    pub fn whitespaces(&mut self) -> &mut Self {
        self.whitespace().multiple_times()
    }

    pub fn line_break(&mut self) -> &mut Self {
        self.add(Token::atom(LINE_BREAK))
    }

    pub fn br(&mut self) -> &mut Self {
        self.line_break()
    }

    pub fn anything(&mut self) -> &mut Self {
        self.add(Token::atom(ANYTHING))
    }

    /// Match one character from `members`.
    pub fn allowed_characters<I>(&mut self, members: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<ClassMember>,
    {
        let members: Vec<ClassMember> = members.into_iter().map(Into::into).collect();
        self.add(Token::atom(render_class(&members, false)))
    }

    /// Match one character not in `members`.
    pub fn not_allowed_characters<I>(&mut self, members: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<ClassMember>,
    {
        let members: Vec<ClassMember> = members.into_iter().map(Into::into).collect();
        self.add(Token::atom(render_class(&members, true)))
    }
}

// Negation and capture
impl HumanRegex {
    /// Assert that the expression built by `f` does not follow.
    ///
    /// The lookahead consumes nothing, so it must be followed by something
    /// that does. A quantifier cannot follow it: the engine rejects a
    /// repeated lookahead with [`Error::Compile`](crate::Error::Compile).
    pub fn not<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut HumanRegex) -> &mut HumanRegex,
    {
        let pattern = Self::generate(f);
        self.add(Token::atom(format!("(?!{pattern})")))
    }

    /// Negative lookahead on `value`.
    ///
    /// Same contract as [`not`](Self::not): follow it with consuming content,
    /// never with a quantifier.
    pub fn not_ahead(&mut self, value: impl Into<Value>) -> &mut Self {
        let pattern = value.into().into_pattern();
        self.add(Token::atom(format!("(?!{pattern})")))
    }

    /// Match anything except `value`.
    ///
    /// A single literal character becomes a negated class repeated at least
    /// once. Longer values cannot be expressed as a class and become a
    /// lookahead guard in front of [`anything`](Self::anything). An empty
    /// value excludes nothing and is plain [`anything`](Self::anything).
    pub fn anything_but(&mut self, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        if let Some(c) = value.as_single_char() {
            return self
                .add(Token::atom(render_class(&[ClassMember::Single(c)], true)))
                .at_least(1);
        }
        let pattern = value.into_pattern();
        if pattern.is_empty() {
            return self.anything();
        }
        self.not_ahead(Value::Pattern(pattern)).anything()
    }

    /// Add a capturing group built by `f` on a fresh builder.
    pub fn capture<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut HumanRegex) -> &mut HumanRegex,
    {
        let pattern = Self::generate(f);
        self.add(Token::atom(format!("({pattern})")))
    }

    /// Run `f` on a fresh builder and return the body of the builder it hands back.
    pub(crate) fn generate<F>(f: F) -> String
    where
        F: FnOnce(&mut HumanRegex) -> &mut HumanRegex,
    {
        let mut fresh = HumanRegex::new();
        f(&mut fresh).raw()
    }
}

// Rendering
impl HumanRegex {
    /// The expression body without anchors or mode flags.
    ///
    /// This is what a parent builder embeds.
    pub fn raw(&self) -> String {
        self.sequence.render()
    }

    /// The complete pattern handed to the engine.
    pub fn render(&self) -> String {
        let start = if self.anchor_start { "^" } else { "" };
        let end = if self.anchor_end { "$" } else { "" };
        format!("{MODE_FLAGS}{start}{}{end}", self.raw())
    }

    pub fn to_pattern_string(&self) -> String {
        self.render()
    }
}

impl fmt::Display for HumanRegex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
