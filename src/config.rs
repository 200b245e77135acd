//! Configuration.
//!
//! Configuration is a JSON file whose fields are all optional:
//!
//! ```json
//! {
//!     "stop_words": ["BACKGROUND:", "METHODS:"],
//!     "surround_chars": ["(", ")", "[", "]"],
//!     "digest_algorithm": "SHA-1",
//!     "key_field": "sentence_id",
//!     "sentence_splitter": "punctuation",
//!     "sentence_chain": [{"kind": "stop"}, {"kind": "surround"}],
//!     "entity_chain": [{"kind": "stop"}, {"kind": "surround"}, {"kind": "case", "mode": "lower"}]
//! }
//! ```
//!
//! Chains are listed from the source outward: the first filter wraps the whitespace tokenizer.
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::filtering::{Surround, DEFAULT_SURROUND_CHARS, STRUCTURE_WORDS};
use crate::processing::Sentencer;
use crate::tokenizers::{ChainSpec, FilterKind, SentenceSplitter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub stop_words: Vec<String>,
    pub surround_chars: Vec<char>,
    pub digest_algorithm: String,
    pub key_field: Option<String>,
    pub sentence_splitter: SentenceSplitter,
    pub sentence_chain: Vec<FilterKind>,
    pub entity_chain: Vec<FilterKind>,
}

impl Default for Config {
    /// Default configuration:
    /// - structured abstract headings as stop words,
    /// - brackets and double quotes as surrounding characters,
    /// - MD5 sentence digests, without key field,
    /// - whitespace-only sentence chain (sentences are kept as written),
    /// - entity chain stripping surrounding characters.
    fn default() -> Self {
        let mut stop_words: Vec<String> = STRUCTURE_WORDS.iter().map(|w| w.to_string()).collect();
        stop_words.sort();

        Self {
            stop_words,
            surround_chars: DEFAULT_SURROUND_CHARS.to_vec(),
            digest_algorithm: "MD5".to_string(),
            key_field: None,
            sentence_splitter: SentenceSplitter::default(),
            sentence_chain: Vec::new(),
            entity_chain: vec![FilterKind::Surround],
        }
    }
}

impl Config {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let config: Config = serde_json::from_reader(reader)?;
        debug!("configuration: {:?}", config);
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        Self::from_reader(json.as_bytes())
    }

    pub fn stop_words(&self) -> Arc<HashSet<String>> {
        Arc::new(self.stop_words.iter().cloned().collect())
    }

    pub fn surround(&self) -> Arc<Surround> {
        Arc::new(Surround::new(self.surround_chars.clone()))
    }

    fn chain_spec(&self, filters: &[FilterKind]) -> ChainSpec {
        ChainSpec::new(filters.to_vec(), self.stop_words(), self.surround())
    }

    pub fn sentence_chain_spec(&self) -> ChainSpec {
        self.chain_spec(&self.sentence_chain)
    }

    pub fn entity_chain_spec(&self) -> ChainSpec {
        self.chain_spec(&self.entity_chain)
    }

    /// Build the configured [Sentencer].
    ///
    /// Fails if the digest algorithm is unknown or empty.
    pub fn sentencer(&self) -> Result<Sentencer, Error> {
        let sentencer = Sentencer::from_name(&self.digest_algorithm)?;
        Ok(match &self.key_field {
            Some(key_field) => sentencer.with_key_field(key_field.as_str()),
            None => sentencer,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::Config;
    use crate::error::Error;
    use crate::filtering::CaseMode;
    use crate::processing::DigestAlgorithm;
    use crate::tokenizers::{FilterKind, SentenceSplitter};

    #[test]
    fn empty_is_default() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.stop_words.contains(&"METHODS:".to_string()));
        assert_eq!(config.sentencer().unwrap().algorithm(), DigestAlgorithm::Md5);
    }

    #[test]
    fn partial() {
        let config = Config::from_json(
            r#"{
                "digest_algorithm": "sha-256",
                "key_field": "sentence_id",
                "sentence_splitter": "unicode",
                "entity_chain": [{"kind": "stop"}, {"kind": "case", "mode": "lower"}]
            }"#,
        )
        .unwrap();

        assert_eq!(config.sentence_splitter, SentenceSplitter::Unicode);
        assert_eq!(
            config.entity_chain_spec().filters(),
            &[
                FilterKind::Stop,
                FilterKind::Case {
                    mode: CaseMode::Lower
                }
            ]
        );
        let sentencer = config.sentencer().unwrap();
        assert_eq!(sentencer.algorithm(), DigestAlgorithm::Sha256);
        assert_eq!(sentencer.key_field(), Some("sentence_id"));
        // untouched fields keep their defaults
        assert_eq!(config.surround_chars, Config::default().surround_chars);
    }

    #[test]
    fn unknown_digest() {
        let config = Config::from_json(r#"{"digest_algorithm": ""}"#).unwrap();
        assert!(matches!(config.sentencer(), Err(Error::UnknownDigest(_))));
    }

    #[test]
    fn invalid_json() {
        assert!(matches!(
            Config::from_json(r#"{"entity_chain": [{"kind": "stemmer"}]}"#),
            Err(Error::Serde(_))
        ));
    }

    #[test]
    fn from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"stop_words": ["the"]}}"#).unwrap();
        let config = Config::from_path(file.path()).unwrap();
        assert_eq!(config.stop_words, vec!["the".to_string()]);
        assert!(config.stop_words().contains("the"));
    }
}
