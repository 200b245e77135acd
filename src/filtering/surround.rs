//! Surrounding punctuation removal.
//!
//! `<<test>>` becomes `test`, while `(t)-est` only loses its leading parenthesis:
//! characters inside a token are never touched.
use std::sync::Arc;

use crate::error::Error;
use crate::tokenizers::{ResettableTokenizer, Token, Tokenizer};

pub const DEFAULT_SURROUND_CHARS: [char; 9] = ['"', '(', ')', '<', '>', '[', ']', '{', '}'];

/// Strips leading and trailing runs of a set of characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surround {
    chars: Vec<char>,
}

impl Surround {
    pub fn new(chars: Vec<char>) -> Self {
        Self { chars }
    }

    /// Strip surrounding characters from `text`.
    ///
    /// Fails with [Error::InvalidArgument] if there is no text to work on.
    pub fn strip<'a>(&self, text: Option<&'a str>) -> Result<&'a str, Error> {
        match text {
            Some(text) => Ok(text.trim_matches(|c: char| self.chars.contains(&c))),
            None => Err(Error::InvalidArgument(
                "no input to strip surrounding characters from".to_string(),
            )),
        }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl Default for Surround {
    fn default() -> Self {
        Self::new(DEFAULT_SURROUND_CHARS.to_vec())
    }
}

/// Applies [Surround] to every token.
///
/// Tokens that are only made of surrounding characters are dropped.
pub struct SurroundFilter<T> {
    inner: T,
    surround: Arc<Surround>,
}

impl<T: Tokenizer> SurroundFilter<T> {
    pub fn new(inner: T, surround: Arc<Surround>) -> Self {
        Self { inner, surround }
    }
}

impl<T: Tokenizer> Tokenizer for SurroundFilter<T> {
    fn next_token(&mut self) -> Result<Option<Token>, Error> {
        while let Some(token) = self.inner.next_token()? {
            let stripped = self.surround.strip(Some(token.text()))?;
            if stripped.is_empty() {
                continue;
            }
            if stripped.len() == token.text().len() {
                return Ok(Some(token));
            }
            let stripped = stripped.to_string();
            return Ok(Some(token.with_text(stripped)));
        }
        Ok(None)
    }
}

impl<T: ResettableTokenizer> ResettableTokenizer for SurroundFilter<T> {
    fn reset(&mut self, input: &str) {
        self.inner.reset(input)
    }
}
