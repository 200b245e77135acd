//! Stop word removal.
use std::collections::HashSet;
use std::sync::Arc;

use lazy_static::lazy_static;

use crate::error::Error;
use crate::tokenizers::{ResettableTokenizer, Token, Tokenizer};

lazy_static! {
    /// Section headings of structured Medline abstracts.
    ///
    /// They are uppercase: use them before any lowercasing filter.
    pub static ref STRUCTURE_WORDS: HashSet<&'static str> = [
        "BACKGROUND",
        "BACKGROUND:",
        "INTRODUCTION:",
        "AIM:",
        "AIMS:",
        "OBJECTIVE:",
        "OBJECTIVES:",
        "PURPOSE:",
        "DESIGN:",
        "SETTING:",
        "SETTINGS:",
        "PARTICIPANTS:",
        "PATIENTS:",
        "SUBJECTS:",
        "INTERVENTION:",
        "INTERVENTIONS:",
        "MEASUREMENTS:",
        "METHODS",
        "METHODS:",
        "MATERIALS",
        "RESULTS",
        "RESULTS:",
        "FINDINGS:",
        "DISCUSSION:",
        "CONCLUSION",
        "CONCLUSION:",
        "CONCLUSIONS",
        "CONCLUSIONS:",
    ]
    .iter()
    .copied()
    .collect();
}

/// Drops tokens whose text is exactly one of the stop words (case-sensitive).
pub struct StopFilter<T> {
    inner: T,
    stop_words: Arc<HashSet<String>>,
}

impl<T: Tokenizer> StopFilter<T> {
    pub fn new(inner: T, stop_words: Arc<HashSet<String>>) -> Self {
        Self { inner, stop_words }
    }

    /// Stop filter using [STRUCTURE_WORDS].
    pub fn structure_words(inner: T) -> Self {
        let stop_words = STRUCTURE_WORDS.iter().map(|w| w.to_string()).collect();
        Self::new(inner, Arc::new(stop_words))
    }
}

impl<T: Tokenizer> Tokenizer for StopFilter<T> {
    fn next_token(&mut self) -> Result<Option<Token>, Error> {
        // keep pulling until we get a token that is not a stop word
        while let Some(token) = self.inner.next_token()? {
            if !self.stop_words.contains(token.text()) {
                return Ok(Some(token));
            }
        }
        Ok(None)
    }
}

impl<T: ResettableTokenizer> ResettableTokenizer for StopFilter<T> {
    fn reset(&mut self, input: &str) {
        self.inner.reset(input)
    }
}
