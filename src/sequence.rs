//! The ordered token sequence behind a [`HumanRegex`](crate::HumanRegex).
//!
//! All structural rewrites live here:
//!
//! | Last token kind            | Incoming          | Effect                                      |
//! |----------------------------|-------------------|---------------------------------------------|
//! | `OpenBranch`               | atom / `either`   | insert `))` first                           |
//! | `ClosedBranch` (+ q)       | atom / `either`   | insert `)` first                            |
//! | `OpenBranch`               | `or`              | branch text starts with `)\|`               |
//! | `ClosedBranch` (+ q)       | `or`              | branch text starts with `\|`                |
//! | first `OpenBranch`         | quantifier        | insert `)` (`ClosedBranch`) first           |
//! | later `OpenBranch`         | quantifier        | insert `))` (`ClosedGroup`) first           |
//! | `Quantifier(+)`            | quantifier `q`    | replace `+` with `q` (`?` gives `*`)        |
//! | `Quantifier(p)`, other `p` | quantifier `q`    | wrap the repeated unit in `(?:...)`, add `q` |
//!
//! Rendering applies the same closing rule without mutating the sequence, so
//! the rendered text is always a complete pattern.

use itertools::Itertools;
use tracing::{trace, warn};

use crate::token::{Repetition, Token, TokenKind};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Vec<Token>,
}

/// Where the sequence stands with respect to an alternation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Alternation {
    None,
    OpenBranch,
    ClosedBranch,
}

impl TokenSequence {
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn last_kind(&self) -> Option<TokenKind> {
        self.tokens.last().map(|t| t.kind)
    }

    /// Append a token, closing any pending alternation first.
    ///
    /// Quantifier tokens go through [`push_quantifier`](Self::push_quantifier).
    pub fn push(&mut self, token: Token) {
        if let TokenKind::Quantifier(rep) = token.kind {
            return self.push_quantifier(rep);
        }
        self.close_alternation();
        self.tokens.push(token);
    }

    /// Start a new alternation whose first branch is `pattern`.
    pub fn open_alternation(&mut self, pattern: &str) {
        self.push(Token::with_kind("(?:", TokenKind::OpenGroup));
        self.tokens.push(Token::with_kind(
            format!("(?:{pattern}"),
            TokenKind::OpenBranch,
        ));
    }

    /// Add another branch to the open alternation.
    ///
    /// Without an open alternation the branch starts a new one.
    pub fn push_branch(&mut self, pattern: &str) {
        let text = match self.alternation() {
            Alternation::OpenBranch => format!(")|(?:{pattern}"),
            Alternation::ClosedBranch => format!("|(?:{pattern}"),
            Alternation::None => {
                warn!(pattern, "`or` without a preceding `either`; starting a new alternation");
                return self.open_alternation(pattern);
            }
        };
        self.tokens.push(Token::with_kind(text, TokenKind::OpenBranch));
    }

    /// Apply `rep` to the preceding token.
    ///
    /// On the first branch of an alternation the repetition applies to that
    /// branch and the alternation stays open. On any later branch it closes
    /// the alternation and repeats all of it.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty: there is nothing to repeat.
    pub fn push_quantifier(&mut self, rep: Repetition) {
        assert!(
            !self.tokens.is_empty(),
            "quantifier `{rep}` has no preceding expression to repeat"
        );

        match self.last_kind() {
            Some(TokenKind::OpenBranch) if self.on_first_branch() => {
                trace!(%rep, "closing branch before quantifier");
                self.tokens.push(Token::with_kind(")", TokenKind::ClosedBranch));
            }
            Some(TokenKind::OpenBranch) => {
                trace!(%rep, "closing alternation before quantifier");
                self.tokens.push(Token::with_kind("))", TokenKind::ClosedGroup));
            }
            Some(TokenKind::Quantifier(Repetition::OneOrMore)) => {
                let merged = match rep {
                    Repetition::Optional => Repetition::ZeroOrMore,
                    _ => rep,
                };
                trace!(%merged, "replacing one-or-more");
                self.tokens.pop();
                self.tokens.push(Token::quantifier(merged));
                return;
            }
            Some(TokenKind::Quantifier(prev)) => {
                trace!(%prev, %rep, "grouping repeated expression");
                self.group_repeated();
            }
            _ => {}
        }

        self.tokens.push(Token::quantifier(rep));
    }

    /// Render the tokens, closing a trailing alternation if one is open.
    pub fn render(&self) -> String {
        let mut out = self.tokens.iter().map(|t| t.text.as_str()).join("");
        if let Some(close) = self.pending_close() {
            out.push_str(close);
        }
        out
    }

    fn close_alternation(&mut self) {
        if let Some(close) = self.pending_close() {
            trace!(close, "closing pending alternation");
            self.tokens.push(Token::with_kind(close, TokenKind::ClosedGroup));
        }
    }

    fn pending_close(&self) -> Option<&'static str> {
        match self.alternation() {
            Alternation::OpenBranch => Some("))"),
            Alternation::ClosedBranch => Some(")"),
            Alternation::None => None,
        }
    }

    // Quantifiers never follow another quantifier or an open branch directly,
    // so skipping them always lands on the token they apply to.
    fn alternation(&self) -> Alternation {
        match self
            .tokens
            .iter()
            .rev()
            .map(|t| t.kind)
            .find(|k| !k.is_quantifier())
        {
            Some(TokenKind::OpenBranch) => Alternation::OpenBranch,
            Some(TokenKind::ClosedBranch) => Alternation::ClosedBranch,
            _ => Alternation::None,
        }
    }

    fn on_first_branch(&self) -> bool {
        let before_last = self.tokens.iter().rev().nth(1).map(|t| t.kind);
        before_last == Some(TokenKind::OpenGroup)
    }

    /// Fold the trailing quantified unit into one group so another
    /// quantifier can follow it.
    ///
    /// The unit is an atom, a whole closed alternation, or the first branch
    /// of a still open alternation. In the last case the branch token keeps
    /// its kind and the branch is closed again, so the alternation stays open.
    fn group_repeated(&mut self) {
        let unit = self.tokens.len() - 2;
        let kind = self.tokens[unit].kind;
        let start = match kind {
            TokenKind::ClosedBranch => unit - 1,
            TokenKind::ClosedGroup => self.tokens[..unit]
                .iter()
                .rposition(|t| t.kind == TokenKind::OpenGroup)
                .unwrap_or(unit),
            _ => unit,
        };
        let body = self.tokens.drain(start..).map(|t| t.text).join("");
        if kind == TokenKind::ClosedBranch {
            self.tokens
                .push(Token::with_kind(format!("(?:{body}"), TokenKind::OpenBranch));
            self.tokens.push(Token::with_kind(")", TokenKind::ClosedBranch));
        } else {
            self.tokens.push(Token::atom(format!("(?:{body})")));
        }
    }
}
