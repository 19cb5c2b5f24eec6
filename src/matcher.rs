//! Token-level matching of question templates against user input.

use crate::pattern::PatternToken;

/// Matches `pattern` against `input` and extracts wildcard bindings.
///
/// Returns one binding per wildcard occurrence, in pattern order: a
/// single-token wildcard binds exactly one token, a multi-token wildcard
/// binds zero or more. A mismatch is a normal `None`, never an error.
///
/// The multi-token wildcard tries the empty binding first and grows it one
/// token at a time, accepting the first split where the rest of the pattern
/// matches the rest of the input. Templates never contain two adjacent
/// wildcards, so this shortest-first search is deterministic and recursion
/// depth stays bounded by the pattern length.
pub fn match_tokens(pattern: &[PatternToken], input: &[&str]) -> Option<Vec<Vec<String>>> {
    let Some((head, rest)) = pattern.split_first() else {
        return input.is_empty().then(Vec::new);
    };

    match head {
        PatternToken::Lit(lit) => {
            let (word, tail) = input.split_first()?;
            if lit != word {
                return None;
            }
            match_tokens(rest, tail)
        }
        PatternToken::One => {
            let (word, tail) = input.split_first()?;
            let mut bindings = match_tokens(rest, tail)?;
            bindings.insert(0, vec![word.to_string()]);
            Some(bindings)
        }
        PatternToken::Any => {
            for take in 0..=input.len() {
                if let Some(mut bindings) = match_tokens(rest, &input[take..]) {
                    let bound = input[..take].iter().map(|t| t.to_string()).collect();
                    bindings.insert(0, bound);
                    return Some(bindings);
                }
            }
            None
        }
    }
}
