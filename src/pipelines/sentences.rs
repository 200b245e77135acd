//! Sentence deduplication pipeline.
//!
//! Documents of a batch are split into sentence documents in parallel,
//! then every per-document sentence map is merged into a single one.
use log::{debug, info};
use rayon::prelude::*;

use crate::config::Config;
use crate::document::EosDocument;
use crate::error::Error;
use crate::processing::{merge_sentence_maps, SentenceMap, Sentencer, SpaceJoiner};
use crate::tokenizers::{Chain, ChainSpec, ResettableTokenizer, SentenceSplitter};

use super::Pipeline;

/// Tokenizers owned by a single rayon worker.
struct Worker {
    sentences: Box<dyn ResettableTokenizer + Send>,
    chain: Chain,
}

pub struct SentencePipeline {
    sentencer: Sentencer,
    splitter: SentenceSplitter,
    chain: ChainSpec,
}

impl SentencePipeline {
    pub fn new(config: &Config) -> Result<Self, Error> {
        Ok(Self {
            sentencer: config.sentencer()?,
            splitter: config.sentence_splitter,
            chain: config.sentence_chain_spec(),
        })
    }

    fn worker(&self) -> Worker {
        Worker {
            sentences: self.splitter.build(),
            chain: self.chain.build(),
        }
    }

    fn process(&self, worker: &mut Worker, doc: &EosDocument) -> Result<SentenceMap, Error> {
        let sentences = self.sentencer.to_sentence_documents(
            doc,
            &mut *worker.sentences,
            &mut worker.chain,
            &SpaceJoiner,
        )?;
        debug!("{:?}: {} sentences", doc.title(), sentences.len());
        Ok(sentences)
    }

    /// Split a single document.
    pub fn sentences(&self, doc: &EosDocument) -> Result<SentenceMap, Error> {
        self.process(&mut self.worker(), doc)
    }
}

impl Pipeline<Vec<EosDocument>, SentenceMap> for SentencePipeline {
    fn run(&self, docs: Vec<EosDocument>) -> Result<SentenceMap, Error> {
        info!(
            "splitting {} documents into sentences ({})",
            docs.len(),
            self.sentencer.algorithm()
        );

        let maps = docs
            .par_iter()
            .map_init(|| self.worker(), |worker, doc| self.process(worker, doc))
            .collect::<Result<Vec<SentenceMap>, Error>>()?;

        let mut sentences = SentenceMap::new();
        let mut nb_duplicates = 0;
        for map in maps {
            nb_duplicates += merge_sentence_maps(&mut sentences, map);
        }

        info!(
            "{} unique sentences, {} cross-document duplicates merged",
            sentences.len(),
            nb_duplicates
        );
        Ok(sentences)
    }
}
