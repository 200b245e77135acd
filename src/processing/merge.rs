//! Combination of sentence maps.
//!
//! Sentence maps coming from different documents (or different batches) are merged
//! by digest: colliding sentences are the same canonical sentence, and their metadata are unioned.
use super::SentenceMap;

/// Merge `other` into `acc`.
///
/// Returns the number of sentences of `other` that were already in `acc`.
pub fn merge_sentence_maps(acc: &mut SentenceMap, other: SentenceMap) -> usize {
    let mut nb_duplicates = 0;
    for (digest, doc) in other {
        match acc.get_mut(&digest) {
            Some(existing) => {
                existing.merge(&doc);
                nb_duplicates += 1;
            }
            None => {
                acc.insert(digest, doc);
            }
        }
    }
    nb_duplicates
}
