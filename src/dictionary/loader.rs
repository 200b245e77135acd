//! Dictionary loading.
//!
//! Dictionaries are tab-separated files, one term per line, followed by its identifiers:
//!
//! ```text
//! # term	identifiers...
//! nirIX	GENE:5334
//! nitric oxide reductase	PROT:1221	PROT:1222
//! ```
//!
//! Identifiers of repeated terms are merged.
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use itertools::Itertools;
use log::{debug, info, warn};

use crate::error::Error;
use crate::tokenizers::{tokenize, ResettableTokenizer, Token};

use super::EntityTrie;

/// Builds an [EntityTrie] from a tab-separated source.
///
/// Without a canonicalizer, terms are only whitespace-normalized.
/// With one, terms go through the same tokenizer chain as the recognized text,
/// so that dictionary keys and scanned token spans have the same shape.
#[derive(Default)]
pub struct DictionaryLoader<'a> {
    canonicalizer: Option<&'a mut dyn ResettableTokenizer>,
}

impl<'a> DictionaryLoader<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_canonicalizer(canonicalizer: &'a mut dyn ResettableTokenizer) -> Self {
        Self {
            canonicalizer: Some(canonicalizer),
        }
    }

    /// Rebuild `term` as a space-joined token sequence.
    fn canonicalize(&mut self, term: &str) -> Result<String, Error> {
        match self.canonicalizer.as_mut() {
            Some(tokenizer) => Ok(tokenize(&mut **tokenizer, term)?
                .iter()
                .map(Token::text)
                .join(" ")),
            None => Ok(term.split_whitespace().join(" ")),
        }
    }

    pub fn load<R: Read>(&mut self, reader: R) -> Result<EntityTrie, Error> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut trie = EntityTrie::new();
        let mut nb_records = 0;
        for record in reader.records() {
            let record = record?;
            nb_records += 1;
            let line = record.position().map(|p| p.line()).unwrap_or_default();

            let term = match record.get(0) {
                Some(term) => term,
                None => continue,
            };

            let key = self.canonicalize(term)?;
            if key.is_empty() {
                warn!(
                    "dictionary line {}: term {:?} is empty once tokenized, skipping",
                    line, term
                );
                continue;
            }

            let ids: Vec<&str> = record
                .iter()
                .skip(1)
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .collect();
            if ids.is_empty() {
                warn!("dictionary line {}: no identifier for term {:?}, skipping", line, term);
                continue;
            }

            for id in ids {
                trie.add_id(&key, id);
            }
        }

        debug!("read {} dictionary records", nb_records);
        info!("loaded {} dictionary terms", trie.len());
        Ok(trie)
    }

    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<EntityTrie, Error> {
        let path = path.as_ref();
        debug!("loading dictionary from {:?}", path);
        let file = File::open(path)?;
        self.load(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::DictionaryLoader;
    use crate::error::Error;
    use crate::filtering::CaseMode;
    use crate::tokenizers::{ChainSpec, FilterKind};

    const DICT: &str = "# comment line
nirIX\tGENE:5334
nitric   oxide reductase\tPROT:1221\tPROT:1222
nirIX\tGENE:5335
orphan term
\tGENE:0
";

    fn ids(trie: &crate::dictionary::EntityTrie, key: &str) -> Vec<String> {
        trie.get(key)
            .map(|ids| ids.iter().cloned().collect())
            .unwrap_or_default()
    }

    #[test_log::test]
    fn load() {
        let trie = DictionaryLoader::new().load(DICT.as_bytes()).unwrap();

        assert_eq!(trie.len(), 2);
        assert_eq!(ids(&trie, "nirIX"), vec!["GENE:5334", "GENE:5335"]);
        assert_eq!(
            ids(&trie, "nitric oxide reductase"),
            vec!["PROT:1221", "PROT:1222"]
        );
        assert!(trie.get("orphan term").is_none());
    }

    #[test]
    fn load_canonicalized() {
        let spec = ChainSpec::new(
            vec![FilterKind::Surround, FilterKind::Case { mode: CaseMode::Lower }],
            Default::default(),
            Default::default(),
        );
        let mut chain = spec.build();
        let trie = DictionaryLoader::with_canonicalizer(&mut chain)
            .load("(NirIX)\tGENE:1\nNitric Oxide\tCHEM:2\n".as_bytes())
            .unwrap();

        assert_eq!(ids(&trie, "nirix"), vec!["GENE:1"]);
        assert_eq!(ids(&trie, "nitric oxide"), vec!["CHEM:2"]);
    }

    #[test]
    fn load_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DICT.as_bytes()).unwrap();

        let trie = DictionaryLoader::new().load_path(file.path()).unwrap();
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn missing_file() {
        let res = DictionaryLoader::new().load_path("does/not/exist.tsv");
        assert!(matches!(res, Err(Error::Io(_))));
    }
}
