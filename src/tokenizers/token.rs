//! Token type.
use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::metadata::Meta;

/// Token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    #[default]
    Default,
    Entity,
    Structural,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Default => "default",
            TokenType::Entity => "entity",
            TokenType::Structural => "structural",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A span of text, with a kind and metadata.
///
/// Tokens are not modified in place: filters build new tokens
/// with [Token::with_text], [Token::with_kind] or [Token::with_meta].
///
/// `start` and `end` are byte offsets in the text the source tokenizer has been reset with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    text: String,
    kind: TokenType,
    #[serde(default)]
    meta: Meta,
    start: usize,
    end: usize,
}

impl Token {
    /// New [TokenType::Default] token without metadata.
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            kind: TokenType::Default,
            meta: Meta::default(),
            start,
            end,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> TokenType {
        self.kind
    }

    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Same token, with another text.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self
        }
    }

    pub fn with_kind(self, kind: TokenType) -> Self {
        Self { kind, ..self }
    }

    pub fn with_meta(self, meta: Meta) -> Self {
        Self { meta, ..self }
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.text, self.kind)
    }
}
