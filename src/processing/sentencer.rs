//! Sentence fragmentation and deduplication.
//!
//! A document is split into sentences, each sentence (and the title) is
//! tokenized and rebuilt into a canonical text, and one new document is produced
//! per canonical sentence, keyed by the digest of that text.
//!
//! Since keys are digests of *canonical* text, sentences only differing by
//! spacing (or by whatever the tokenizer chain normalizes) end up under the same key.
use std::collections::HashMap;

use log::{debug, trace};

use crate::document::EosDocument;
use crate::error::Error;
use crate::tokenizers::{tokenize, ResettableTokenizer, Tokens};

use super::{DigestAlgorithm, TextBuilder};

/// Digest -> sentence document.
pub type SentenceMap = HashMap<String, EosDocument>;

#[derive(Debug, Clone, Default)]
pub struct Sentencer {
    algorithm: DigestAlgorithm,
    key_field: Option<String>,
}

impl Sentencer {
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        Self {
            algorithm,
            key_field: None,
        }
    }

    /// Sentencer using the algorithm named `name`.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        Ok(Self::new(name.parse()?))
    }

    /// Also store each sentence digest in its document's metadata, under `key_field`.
    pub fn with_key_field(mut self, key_field: impl Into<String>) -> Self {
        self.key_field = Some(key_field.into());
        self
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    pub fn key_field(&self) -> Option<&str> {
        self.key_field.as_deref()
    }

    /// Tokenize and rebuild `text`.
    fn canonical(
        text: &str,
        tokenizer: &mut dyn ResettableTokenizer,
        text_builder: &dyn TextBuilder,
    ) -> Result<String, Error> {
        let tokens = tokenize(tokenizer, text)?;
        Ok(text_builder.build(&tokens))
    }

    /// Split `doc` into sentence documents, keyed by canonical sentence digest.
    ///
    /// Every produced document holds the canonical title and a copy of `doc`'s metadata.
    /// A missing title is rebuilt as an empty string, a missing text yields no sentences.
    /// Sentences with identical canonical text collapse to a single entry.
    pub fn to_sentence_documents(
        &self,
        doc: &EosDocument,
        sentence_tokenizer: &mut dyn ResettableTokenizer,
        tokenizer: &mut dyn ResettableTokenizer,
        text_builder: &dyn TextBuilder,
    ) -> Result<SentenceMap, Error> {
        let title = match doc.title() {
            Some(title) => Self::canonical(title, tokenizer, text_builder)?,
            None => String::new(),
        };

        let mut sentences = SentenceMap::new();
        let text = match doc.text() {
            Some(text) => text,
            None => {
                debug!("document {:?} has no text", title);
                return Ok(sentences);
            }
        };

        sentence_tokenizer.reset(text);
        for sentence in Tokens::new(sentence_tokenizer) {
            let sentence = sentence?;
            let canonical = Self::canonical(sentence.text(), tokenizer, text_builder)?;
            if canonical.is_empty() {
                trace!("skipping empty sentence at {:?}", sentence.span());
                continue;
            }

            let digest = self.algorithm.hex_digest(canonical.as_bytes());
            let mut meta = doc.meta().clone();
            if let Some(key_field) = &self.key_field {
                meta.insert(key_field.as_str(), vec![digest.clone()]);
            }

            trace!("{} {:?}", digest, canonical);
            let sentence_doc = EosDocument::new(Some(title.clone()), Some(canonical), meta);
            if sentences.insert(digest, sentence_doc).is_some() {
                trace!("duplicate sentence at {:?}", sentence.span());
            }
        }

        Ok(sentences)
    }
}
