/*! Dictionary store

Entity dictionaries are kept in a [Trie] mapping (space-joined) terms to identifier sets.
Once loaded, an [EntityTrie] is read-only and can be shared by every recognizer
through an [std::sync::Arc].
!*/
mod loader;
mod trie;

pub use loader::DictionaryLoader;
pub use trie::{EntityTrie, IdSet, NodeId, Trie};
