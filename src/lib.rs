//! # eos-analysis
//!
//! Text analysis core for Medline citations:
//!
//! - composable, resettable tokenizer chains ([tokenizers], [filtering]),
//! - dictionary-based entity recognition over a prefix trie ([dictionary], [transformers]),
//! - sentence fragmentation and digest-based deduplication ([processing]),
//! - batch pipelines tying it all together ([pipelines]).
//!
//! ```
//! use eos_analysis::document::EosDocument;
//! use eos_analysis::metadata::Meta;
//! use eos_analysis::processing::{Sentencer, SpaceJoiner};
//! use eos_analysis::tokenizers::{ChainSpec, SentenceTokenizer};
//!
//! let doc = EosDocument::new(
//!     Some("Transcription regulation".to_string()),
//!     Some("The nirIX gene cluster. A second sentence.".to_string()),
//!     Meta::new(),
//! );
//!
//! let mut sentences = SentenceTokenizer::default();
//! let mut chain = ChainSpec::whitespace().build();
//! let map = Sentencer::default()
//!     .to_sentence_documents(&doc, &mut sentences, &mut chain, &SpaceJoiner)
//!     .unwrap();
//! assert_eq!(map.len(), 2);
//! ```
pub mod config;
pub mod dictionary;
pub mod document;
pub mod error;
pub mod filtering;
pub mod metadata;
pub mod pipelines;
pub mod processing;
pub mod tokenizers;
pub mod transformers;
