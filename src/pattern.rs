use regex::Regex;
use std::sync::LazyLock;

/// One token of a question template. `_` in template text matches exactly one
/// input token, `%` matches zero or more consecutive input tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternToken {
    Lit(String),
    One,
    Any,
}

impl PatternToken {
    fn is_wildcard(&self) -> bool {
        matches!(self, PatternToken::One | PatternToken::Any)
    }
}

/// A parsed question template, e.g. "who directed %".
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    tokens: Vec<PatternToken>,
    text: String,
}

impl Pattern {
    /// Parses a whitespace-separated template string. Templates must not
    /// contain two adjacent wildcards; the matcher relies on that.
    pub fn parse(template: &str) -> Self {
        let tokens: Vec<PatternToken> = template
            .split_whitespace()
            .map(|word| match word {
                "_" => PatternToken::One,
                "%" => PatternToken::Any,
                lit => PatternToken::Lit(lit.to_lowercase()),
            })
            .collect();

        debug_assert!(
            tokens
                .windows(2)
                .all(|pair| !(pair[0].is_wildcard() && pair[1].is_wildcard())),
            "adjacent wildcards in template '{}'",
            template
        );

        Self {
            tokens,
            text: template.to_string(),
        }
    }

    pub fn tokens(&self) -> &[PatternToken] {
        &self.tokens
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[?!.,]").unwrap());

/// Turns a raw query line into plain lowercase tokens. Sentence punctuation
/// is stripped before splitting so "who directed jaws?" tokenizes the same
/// as "who directed jaws".
pub fn tokenize(line: &str) -> Vec<String> {
    PUNCTUATION
        .replace_all(line, "")
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
