//! Character class rendering for `allowed_characters` and friends.

use itertools::Itertools;

/// One member of a character class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassMember {
    Single(char),
    /// Inclusive range.
    Range(char, char),
    Digit,
    Letter,
    Alphanumeric,
    Whitespace,
}

impl ClassMember {
    fn render(&self) -> String {
        match self {
            ClassMember::Single(c) => escape_in_class(*c),
            ClassMember::Range(lo, hi) => format!("{}-{}", escape_in_class(*lo), escape_in_class(*hi)),
            ClassMember::Digit => r"\d".to_string(),
            ClassMember::Letter => "a-zA-Z".to_string(),
            ClassMember::Alphanumeric => "a-zA-Z0-9".to_string(),
            ClassMember::Whitespace => r"\s".to_string(),
        }
    }
}

impl From<char> for ClassMember {
    fn from(c: char) -> Self {
        ClassMember::Single(c)
    }
}

fn escape_in_class(c: char) -> String {
    regex::escape(c.encode_utf8(&mut [0; 4]))
}

/// Render `members` as `[...]`, or `[^...]` when `negated`.
///
/// An empty class cannot be written directly, so it becomes a class that
/// matches nothing (or, negated, any character).
pub fn render_class(members: &[ClassMember], negated: bool) -> String {
    if members.is_empty() {
        return if negated { r"[\s\S]" } else { r"[^\s\S]" }.to_string();
    }
    let body = members.iter().map(ClassMember::render).join("");
    if negated {
        format!("[^{body}]")
    } else {
        format!("[{body}]")
    }
}
