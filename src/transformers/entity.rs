//! Dictionary-based entity recognition.
//!
//! [EntityRecognizer] wraps a tokenizer and merges the longest runs of tokens that form a
//! dictionary term into a single [ENTITY_TYPE] token.
//!
//! With a dictionary holding `f`, `a b` and `a b c d`, the stream `a b e a b c d e f g` becomes
//!
//! ```text
//! [a b] e [a b c d] e [f] g
//! ```
//!
//! Scanning resumes right after a committed entity: entities never overlap.
use std::collections::VecDeque;
use std::sync::Arc;

use itertools::Itertools;
use log::trace;

use crate::dictionary::{EntityTrie, IdSet};
use crate::error::Error;
use crate::tokenizers::{ResettableTokenizer, Token, TokenType, Tokenizer};

/// Kind of recognized tokens.
pub const ENTITY_TYPE: TokenType = TokenType::Entity;

/// Metadata key holding the identifiers of a recognized entity.
pub const ENTITY_ID_KEY: &str = "entity_id";

pub struct EntityRecognizer<T> {
    source: T,
    entities: Option<Arc<EntityTrie>>,
    /// tokens read from source but not emitted yet
    pending: VecDeque<Token>,
}

impl<T: Tokenizer> EntityRecognizer<T> {
    /// New recognizer without entity map.
    ///
    /// [EntityRecognizer::set_entities] has to be called before pulling tokens.
    pub fn new(source: T) -> Self {
        Self {
            source,
            entities: None,
            pending: VecDeque::new(),
        }
    }

    pub fn with_entities(source: T, entities: Arc<EntityTrie>) -> Self {
        Self {
            source,
            entities: Some(entities),
            pending: VecDeque::new(),
        }
    }

    pub fn set_entities(&mut self, entities: Arc<EntityTrie>) {
        self.entities = Some(entities);
    }

    pub fn entities(&self) -> Option<&Arc<EntityTrie>> {
        self.entities.as_ref()
    }

    /// Pull one token from source into the pending buffer.
    /// Returns `false` if the source is exhausted.
    fn fill(&mut self) -> Result<bool, Error> {
        match self.source.next_token()? {
            Some(token) => {
                self.pending.push_back(token);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Find the longest dictionary term starting at the first pending token.
    ///
    /// Returns its length in tokens and its identifiers.
    /// Tokens read past the match stay in the pending buffer.
    fn longest_match<'t>(
        &mut self,
        trie: &'t EntityTrie,
    ) -> Result<Option<(usize, &'t IdSet)>, Error> {
        let mut node = trie.root();
        let mut best = None;
        let mut idx = 0;

        loop {
            if idx == self.pending.len() && !self.fill()? {
                break;
            }

            let text = self.pending[idx].text();
            let next = if idx == 0 {
                trie.step(node, text)
            } else {
                trie.step(node, " ").and_then(|n| trie.step(n, text))
            };

            // no term goes on with this token
            node = match next {
                Some(next) => next,
                None => break,
            };
            idx += 1;

            if let Some(ids) = trie.value(node) {
                best = Some((idx, ids));
            }
        }

        Ok(best)
    }

    /// Merge `tokens` into an entity token.
    ///
    /// The entity keeps the metadata of its first token.
    fn entity(tokens: Vec<Token>, ids: &IdSet) -> Token {
        let start = tokens.first().map_or(0, Token::start);
        let end = tokens.last().map_or(start, Token::end);
        let text = tokens.iter().map(Token::text).join(" ");
        let mut meta = tokens
            .into_iter()
            .next()
            .map(|t| t.meta().clone())
            .unwrap_or_default();
        meta.insert(ENTITY_ID_KEY, ids.iter().cloned().collect());

        trace!("entity {:?} ({}..{}): {:?}", text, start, end, ids);
        Token::new(text, start, end)
            .with_kind(ENTITY_TYPE)
            .with_meta(meta)
    }
}

impl<T: Tokenizer> Tokenizer for EntityRecognizer<T> {
    fn next_token(&mut self) -> Result<Option<Token>, Error> {
        let trie = match &self.entities {
            Some(trie) => Arc::clone(trie),
            None => {
                return Err(Error::IllegalState(
                    "entity recognizer used before an entity map was set".to_string(),
                ))
            }
        };

        if self.pending.is_empty() && !self.fill()? {
            return Ok(None);
        }

        match self.longest_match(&trie)? {
            Some((len, ids)) => {
                let tokens: Vec<Token> = self.pending.drain(..len).collect();
                Ok(Some(Self::entity(tokens, ids)))
            }
            None => Ok(self.pending.pop_front()),
        }
    }
}

impl<T: ResettableTokenizer> ResettableTokenizer for EntityRecognizer<T> {
    fn reset(&mut self, input: &str) {
        self.pending.clear();
        self.source.reset(input);
    }
}
