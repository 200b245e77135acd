//! Tokenizer chains.
//!
//! A [Chain] is a stack of filters on top of a [WhitespaceTokenizer].
//! Chains are described by a [ChainSpec] (a list of [FilterKind], source first)
//! and built by resolving each kind to its filter constructor.
use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::filtering::{CaseFilter, CaseMode, StopFilter, Surround, SurroundFilter};

use super::{ResettableTokenizer, Token, Tokenizer, WhitespaceTokenizer};

/// Available filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterKind {
    Stop,
    Surround,
    Case {
        #[serde(default)]
        mode: CaseMode,
    },
}

/// Chain description, along with the resources filters need.
#[derive(Debug, Clone)]
pub struct ChainSpec {
    filters: Vec<FilterKind>,
    stop_words: Arc<HashSet<String>>,
    surround: Arc<Surround>,
}

impl ChainSpec {
    /// `filters` are applied in order: the first one wraps the whitespace tokenizer.
    pub fn new(
        filters: Vec<FilterKind>,
        stop_words: Arc<HashSet<String>>,
        surround: Arc<Surround>,
    ) -> Self {
        if lowercases_before_stop(&filters) {
            warn!(
                "stop word filter placed after lowercasing in {:?}: \
                 uppercase stop words will never match",
                filters
            );
        }

        Self {
            filters,
            stop_words,
            surround,
        }
    }

    /// Whitespace tokenization only.
    pub fn whitespace() -> Self {
        Self::new(
            Vec::new(),
            Arc::new(HashSet::new()),
            Arc::new(Surround::default()),
        )
    }

    pub fn filters(&self) -> &[FilterKind] {
        &self.filters
    }

    pub fn build(&self) -> Chain {
        debug!("building tokenizer chain {:?}", self.filters);
        let mut tokenizer: Box<dyn ResettableTokenizer + Send> =
            Box::new(WhitespaceTokenizer::default());

        for filter in &self.filters {
            let wrapped: Box<dyn ResettableTokenizer + Send> = match filter {
                FilterKind::Stop => Box::new(StopFilter::new(tokenizer, self.stop_words.clone())),
                FilterKind::Surround => {
                    Box::new(SurroundFilter::new(tokenizer, self.surround.clone()))
                }
                FilterKind::Case { mode } => Box::new(CaseFilter::new(tokenizer, *mode)),
            };
            tokenizer = wrapped;
        }

        Chain { inner: tokenizer }
    }
}

/// Whether a stop filter sees text that has already been lowercased.
fn lowercases_before_stop(filters: &[FilterKind]) -> bool {
    let first_lower = filters.iter().position(|f| {
        matches!(
            f,
            FilterKind::Case {
                mode: CaseMode::Lower
            }
        )
    });
    let last_stop = filters.iter().rposition(|f| *f == FilterKind::Stop);
    matches!((first_lower, last_stop), (Some(lower), Some(stop)) if stop > lower)
}

/// An assembled tokenizer chain.
///
/// [Chain::reset] pushes the new input down to the whitespace tokenizer,
/// so that a single chain can be reused for every document of a batch.
pub struct Chain {
    inner: Box<dyn ResettableTokenizer + Send>,
}

impl Tokenizer for Chain {
    fn next_token(&mut self) -> Result<Option<Token>, Error> {
        self.inner.next_token()
    }
}

impl ResettableTokenizer for Chain {
    fn reset(&mut self, input: &str) {
        self.inner.reset(input)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::{lowercases_before_stop, ChainSpec, FilterKind};
    use crate::filtering::{CaseMode, Surround};
    use crate::tokenizers::{tokenize, ResettableTokenizer, Tokenizer};

    fn spec(filters: Vec<FilterKind>) -> ChainSpec {
        let stop_words: HashSet<String> =
            ["RESULTS:", "the"].iter().map(|s| s.to_string()).collect();
        ChainSpec::new(
            filters,
            Arc::new(stop_words),
            Arc::new(Surround::default()),
        )
    }

    fn texts(spec: &ChainSpec, input: &str) -> Vec<String> {
        let mut chain = spec.build();
        tokenize(&mut chain, input)
            .unwrap()
            .into_iter()
            .map(|t| t.into_text())
            .collect()
    }

    #[test]
    fn whitespace_only() {
        assert_eq!(
            texts(&ChainSpec::whitespace(), "RESULTS: (The) gene"),
            vec!["RESULTS:", "(The)", "gene"]
        );
    }

    #[test]
    fn full_chain() {
        let s = spec(vec![
            FilterKind::Stop,
            FilterKind::Surround,
            FilterKind::Case {
                mode: CaseMode::Lower,
            },
        ]);
        assert_eq!(
            texts(&s, "RESULTS: (The) the nirIX [gene]"),
            vec!["the", "nirix", "gene"]
        );
    }

    #[test]
    fn reset_reuses_chain() {
        let s = spec(vec![FilterKind::Surround]);
        let mut chain = s.build();

        let first = tokenize(&mut chain, "(a) b").unwrap();
        assert_eq!(first.len(), 2);

        // partially consume, then reset
        chain.reset("c d e");
        assert_eq!(chain.next_token().unwrap().unwrap().text(), "c");
        let second = tokenize(&mut chain, "<f>").unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].text(), "f");
    }

    #[test]
    fn deserialize_kinds() {
        let kinds: Vec<FilterKind> = serde_json::from_str(
            r#"[
                {"kind": "stop"},
                {"kind": "surround"},
                {"kind": "case"},
                {"kind": "case", "mode": "upper"}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            kinds,
            vec![
                FilterKind::Stop,
                FilterKind::Surround,
                FilterKind::Case {
                    mode: CaseMode::Lower
                },
                FilterKind::Case {
                    mode: CaseMode::Upper
                },
            ]
        );
    }

    #[test]
    fn stop_after_lowercasing() {
        let lower = FilterKind::Case {
            mode: CaseMode::Lower,
        };
        let upper = FilterKind::Case {
            mode: CaseMode::Upper,
        };

        assert!(lowercases_before_stop(&[lower, FilterKind::Stop]));
        assert!(lowercases_before_stop(&[
            FilterKind::Stop,
            lower,
            FilterKind::Surround,
            FilterKind::Stop
        ]));
        assert!(!lowercases_before_stop(&[FilterKind::Stop, lower]));
        // uppercase stop words still match uppercased text
        assert!(!lowercases_before_stop(&[upper, FilterKind::Stop]));
        assert!(!lowercases_before_stop(&[lower, FilterKind::Surround]));

        // stop words are compared against lowercased text, so "RESULTS:" stays
        let s = spec(vec![lower, FilterKind::Stop]);
        assert_eq!(texts(&s, "RESULTS: The gene"), vec!["results:", "gene"]);
    }

    #[test]
    fn unknown_kind() {
        let kinds: Result<Vec<FilterKind>, _> = serde_json::from_str(r#"[{"kind": "stem"}]"#);
        assert!(kinds.is_err());
    }
}
