//! Arguments accepted by the builder's composing methods.

use std::fmt;

use crate::HumanRegex;

/// Closure that fills a fresh builder and returns the builder to embed.
pub type Generator = Box<dyn FnOnce(&mut HumanRegex) -> &mut HumanRegex>;

/// Something that can be placed inside an expression.
///
/// Literal text is escaped; patterns and generated builders are inserted
/// verbatim.
pub enum Value {
    Literal(String),
    /// Already rendered pattern text.
    Pattern(String),
    Generator(Generator),
}

impl Value {
    pub fn generator<F>(f: F) -> Self
    where
        F: FnOnce(&mut HumanRegex) -> &mut HumanRegex + 'static,
    {
        Value::Generator(Box::new(f))
    }

    /// Resolve into pattern text ready to be wrapped in a token.
    pub fn into_pattern(self) -> String {
        match self {
            Value::Literal(text) => regex::escape(&text),
            Value::Pattern(pattern) => pattern,
            Value::Generator(f) => HumanRegex::generate(f),
        }
    }

    /// The single character of a one-character literal.
    pub(crate) fn as_single_char(&self) -> Option<char> {
        match self {
            Value::Literal(text) => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Value::Pattern(pattern) => f.debug_tuple("Pattern").field(pattern).finish(),
            Value::Generator(_) => f.write_str("Generator(..)"),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Literal(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Literal(text)
    }
}

impl From<&String> for Value {
    fn from(text: &String) -> Self {
        Value::Literal(text.clone())
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Literal(c.to_string())
    }
}

impl From<&HumanRegex> for Value {
    fn from(regex: &HumanRegex) -> Self {
        Value::Pattern(regex.raw())
    }
}

impl From<HumanRegex> for Value {
    fn from(regex: HumanRegex) -> Self {
        Value::Pattern(regex.raw())
    }
}

impl From<&mut HumanRegex> for Value {
    fn from(regex: &mut HumanRegex) -> Self {
        Value::Pattern(regex.raw())
    }
}
