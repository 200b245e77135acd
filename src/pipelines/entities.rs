//! Entity annotation pipeline.
//!
//! Each document of a batch goes through the entity chain and an [EntityRecognizer]
//! sharing the dictionary. Recognized identifiers are also added to the document metadata,
//! under [ENTITY_ID_KEY].
use std::sync::Arc;

use log::{debug, info};
use rayon::prelude::*;

use crate::config::Config;
use crate::dictionary::{EntityTrie, IdSet};
use crate::document::EosDocument;
use crate::error::Error;
use crate::metadata::Meta;
use crate::tokenizers::{tokenize, Chain, ChainSpec, Token};
use crate::transformers::{EntityRecognizer, ENTITY_ID_KEY, ENTITY_TYPE};

use super::Pipeline;

/// A document along with its recognized token streams.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedDocument {
    document: EosDocument,
    title_tokens: Vec<Token>,
    tokens: Vec<Token>,
}

impl AnnotatedDocument {
    pub fn new(document: EosDocument, title_tokens: Vec<Token>, tokens: Vec<Token>) -> Self {
        Self {
            document,
            title_tokens,
            tokens,
        }
    }

    pub fn document(&self) -> &EosDocument {
        &self.document
    }

    /// Tokens of the title.
    pub fn title_tokens(&self) -> &[Token] {
        &self.title_tokens
    }

    /// Tokens of the text.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Entity tokens, title first.
    pub fn entities(&self) -> impl Iterator<Item = &Token> {
        self.title_tokens
            .iter()
            .chain(self.tokens.iter())
            .filter(|t| t.kind() == ENTITY_TYPE)
    }

    /// Every identifier found in the document.
    pub fn entity_ids(&self) -> IdSet {
        self.entities()
            .flat_map(|t| t.meta().get(ENTITY_ID_KEY).unwrap_or_default().iter().cloned())
            .collect()
    }

    pub fn into_parts(self) -> (EosDocument, Vec<Token>, Vec<Token>) {
        (self.document, self.title_tokens, self.tokens)
    }
}

pub struct EntityPipeline {
    chain: ChainSpec,
    entities: Arc<EntityTrie>,
}

impl EntityPipeline {
    pub fn new(config: &Config, entities: Arc<EntityTrie>) -> Self {
        Self {
            chain: config.entity_chain_spec(),
            entities,
        }
    }

    fn recognizer(&self) -> EntityRecognizer<Chain> {
        EntityRecognizer::with_entities(self.chain.build(), self.entities.clone())
    }

    fn annotate(
        &self,
        recognizer: &mut EntityRecognizer<Chain>,
        mut doc: EosDocument,
    ) -> Result<AnnotatedDocument, Error> {
        let title_tokens = match doc.title() {
            Some(title) => tokenize(&mut *recognizer, title)?,
            None => Vec::new(),
        };
        let tokens = match doc.text() {
            Some(text) => tokenize(&mut *recognizer, text)?,
            None => Vec::new(),
        };

        let mut annotated = AnnotatedDocument::new(EosDocument::default(), title_tokens, tokens);
        let ids = annotated.entity_ids();
        debug!("{:?}: {} entities", doc.title(), ids.len());

        if !ids.is_empty() {
            let ids: Meta = std::iter::once((ENTITY_ID_KEY, ids)).collect();
            doc.meta_mut().merge(&ids);
        }
        annotated.document = doc;

        Ok(annotated)
    }

    /// Annotate a single document.
    pub fn annotate_one(&self, doc: EosDocument) -> Result<AnnotatedDocument, Error> {
        self.annotate(&mut self.recognizer(), doc)
    }
}

impl Pipeline<Vec<EosDocument>, Vec<AnnotatedDocument>> for EntityPipeline {
    fn run(&self, docs: Vec<EosDocument>) -> Result<Vec<AnnotatedDocument>, Error> {
        info!(
            "annotating {} documents with {} dictionary terms",
            docs.len(),
            self.entities.len()
        );

        let annotated = docs
            .into_par_iter()
            .map_init(|| self.recognizer(), |r, doc| self.annotate(r, doc))
            .collect::<Result<Vec<AnnotatedDocument>, Error>>()?;

        info!(
            "{} entities found",
            annotated.iter().map(|d| d.entities().count()).sum::<usize>()
        );
        Ok(annotated)
    }
}
