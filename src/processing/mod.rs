/*! Sentence processing

Contains the [Sentencer], that fragments documents into per-sentence documents
keyed by content digest, along with the pieces it is built on
([TextBuilder], [DigestAlgorithm]) and the merging of its outputs.
!*/
mod digest;
mod merge;
mod sentencer;
mod text_builder;

pub use digest::DigestAlgorithm;
pub use merge::merge_sentence_maps;
pub use sentencer::{SentenceMap, Sentencer};
pub use text_builder::{SpaceJoiner, TextBuilder};
