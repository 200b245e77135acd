//! Pipelines.
//!
//! Batch entry points, running documents across rayon workers.
//! Each worker owns its tokenizer chains; dictionaries and stop words are shared read-only.
//!
//! The module provides a light [Pipeline] trait that both pipelines implement.
mod entities;
#[allow(clippy::module_inception)]
mod pipeline;
mod sentences;

pub use entities::{AnnotatedDocument, EntityPipeline};
pub use pipeline::Pipeline;
pub use sentences::SentencePipeline;
