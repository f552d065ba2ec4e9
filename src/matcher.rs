//! Execution methods: run the rendered pattern through `fancy-regex`.
//!
//! The pattern is compiled on every call. A builder is cheap to render and
//! may still be mutated between calls, so nothing is cached.

use std::fmt;

use fancy_regex::{Captures, Regex, RegexBuilder};
use tracing::debug;

use crate::HumanRegex;
use crate::error::{Error, Result};
use crate::match_mode::MatchMode;

impl HumanRegex {
    /// Compile the rendered pattern.
    pub fn compile(&self) -> Result<Regex> {
        let pattern = self.render();
        debug!(%pattern, "compiling expression");
        let compiled = match self.configured_backtrack_limit() {
            Some(limit) => RegexBuilder::new(&pattern).backtrack_limit(limit).build(),
            None => Regex::new(&pattern),
        };
        compiled.map_err(|source| Error::Compile {
            pattern,
            source: Box::new(source),
        })
    }

    /// Test whether the expression matches anywhere in `input`.
    pub fn matches(&self, input: &str) -> Result<bool> {
        Ok(self.compile()?.is_match(input)?)
    }

    /// Collect matched text according to the match mode.
    ///
    /// In [`MatchMode::Single`] the result holds the first match followed by
    /// each of its capture groups. In [`MatchMode::Global`] it holds every
    /// whole match, or the first capture group of every match when the
    /// expression has capture groups.
    pub fn find_matches(&self, haystack: &str) -> Result<Vec<String>> {
        let regex = self.compile()?;
        match self.mode() {
            MatchMode::Single => Ok(regex
                .captures(haystack)?
                .map(|caps| groups(&caps).into_iter().map(str::to_string).collect())
                .unwrap_or_default()),
            MatchMode::Global => {
                let column = if regex.captures_len() > 1 { 1 } else { 0 };
                regex
                    .captures_iter(haystack)
                    .map(|caps| Ok(group(&caps?, column).to_string()))
                    .collect()
            }
        }
    }

    /// Replace every match with the output of `f`.
    ///
    /// `f` receives the whole match followed by each capture group.
    pub fn replace<F, T>(&self, text: &str, mut f: F) -> Result<String>
    where
        F: FnMut(&[&str]) -> T,
        T: fmt::Display,
    {
        self.try_replace(text, |groups| Ok(f(groups)))
    }

    /// Like [`replace`](Self::replace), but stops at the first error `f` returns.
    pub fn try_replace<F, T>(&self, text: &str, mut f: F) -> Result<String>
    where
        F: FnMut(&[&str]) -> anyhow::Result<T>,
        T: fmt::Display,
    {
        let regex = self.compile()?;
        let mut out = String::with_capacity(text.len());
        let mut last_end = 0;
        for caps in regex.captures_iter(text) {
            let caps = caps?;
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let replacement = f(&groups(&caps)).map_err(Error::Callback)?;
            out.push_str(&text[last_end..whole.start()]);
            out.push_str(&replacement.to_string());
            last_end = whole.end();
        }
        out.push_str(&text[last_end..]);
        Ok(out)
    }
}

fn group<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}

/// Group 0 and every capture group; groups that did not take part are empty.
fn groups<'t>(caps: &Captures<'t>) -> Vec<&'t str> {
    (0..caps.len()).map(|i| group(caps, i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_mode_returns_first_match_and_groups() {
        let mut re = HumanRegex::new();
        re.capture(|r| r.digits()).then("-").capture(|r| r.letters());
        assert_eq!(
            re.find_matches("12-ab 34-cd").unwrap(),
            vec!["12-ab", "12", "ab"]
        );
    }

    #[test]
    fn single_mode_without_match_is_empty() {
        let mut re = HumanRegex::new();
        re.find("zzz");
        assert!(re.find_matches("abc").unwrap().is_empty());
    }

    #[test]
    fn global_mode_without_groups_returns_whole_matches() {
        let mut re = HumanRegex::new();
        re.global().digits();
        assert_eq!(re.find_matches("a1 b22 c333").unwrap(), vec!["1", "22", "333"]);
    }

    #[test]
    fn global_mode_with_groups_returns_first_group() {
        let mut re = HumanRegex::new();
        re.global().capture(|r| r.letters()).then("=").digits();
        assert_eq!(re.find_matches("a=1, bc=22").unwrap(), vec!["a", "bc"]);
    }

    #[test]
    fn non_participating_groups_are_empty() {
        let mut re = HumanRegex::new();
        re.find("x").maybe(Value::generator(|r| r.capture(|c| c.digit())));
        assert_eq!(re.find_matches("x").unwrap(), vec!["x", ""]);
    }

    #[test]
    fn replace_passes_groups_in_order() {
        let mut re = HumanRegex::new();
        re.capture(|r| r.letters()).then(":").capture(|r| r.digits());
        let replaced = re
            .replace("a:1 b:2", |groups| format!("{}={}", groups[2], groups[1]))
            .unwrap();
        assert_eq!(replaced, "1=a 2=b");
    }

    #[test]
    fn replace_without_match_returns_input() {
        let mut re = HumanRegex::new();
        re.find("zzz");
        assert_eq!(re.replace("abc", |_| "x").unwrap(), "abc");
    }

    #[test]
    fn try_replace_surfaces_callback_errors() {
        let mut re = HumanRegex::new();
        re.digits();
        let err = re
            .try_replace("a1", |_| -> anyhow::Result<String> { anyhow::bail!("nope") })
            .unwrap_err();
        assert!(matches!(err, Error::Callback(_)));
        assert_eq!(err.to_string(), "replacement callback failed: nope");
    }

    #[test]
    fn rejected_pattern_is_a_compile_error() {
        let mut re = HumanRegex::new();
        re.then(Value::Pattern("(".into()));
        let err = re.compile().unwrap_err();
        assert!(matches!(err, Error::Compile { ref pattern, .. } if pattern == "(?m)(?:()"));
    }

    #[test]
    fn backtrack_limit_is_forwarded() {
        let mut re = HumanRegex::new();
        re.backtrack_limit(1_000).not_ahead("a").anything();
        assert!(re.matches("b").unwrap());
    }
}
