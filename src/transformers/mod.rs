/*! Token stream transformers.

Transformers sit at the end of a tokenizer chain and rewrite its output.
Currently the only one is the dictionary-based [EntityRecognizer].
!*/

mod entity;

pub use entity::{EntityRecognizer, ENTITY_ID_KEY, ENTITY_TYPE};
