//! Case normalization.
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::tokenizers::{ResettableTokenizer, Token, Tokenizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    #[default]
    Lower,
    Upper,
}

/// Folds the case of every token text. Kind and metadata are kept.
pub struct CaseFilter<T> {
    inner: T,
    mode: CaseMode,
}

impl<T: Tokenizer> CaseFilter<T> {
    pub fn new(inner: T, mode: CaseMode) -> Self {
        Self { inner, mode }
    }

    pub fn lower(inner: T) -> Self {
        Self::new(inner, CaseMode::Lower)
    }
}

impl<T: Tokenizer> Tokenizer for CaseFilter<T> {
    fn next_token(&mut self) -> Result<Option<Token>, Error> {
        let mode = self.mode;
        Ok(self.inner.next_token()?.map(|token| {
            let text = match mode {
                CaseMode::Lower => token.text().to_lowercase(),
                CaseMode::Upper => token.text().to_uppercase(),
            };
            token.with_text(text)
        }))
    }
}

impl<T: ResettableTokenizer> ResettableTokenizer for CaseFilter<T> {
    fn reset(&mut self, input: &str) {
        self.inner.reset(input)
    }
}
