use std::collections::HashSet;

use eos_analysis::config::Config;
use eos_analysis::document::EosDocument;
use eos_analysis::metadata::Meta;
use eos_analysis::pipelines::{Pipeline, SentencePipeline};
use eos_analysis::processing::{SentenceMap, Sentencer, SpaceJoiner};
use eos_analysis::tokenizers::{ChainSpec, SentenceTokenizer};

fn medline_meta() -> Meta {
    vec![
        ("pmid", vec!["10022"]),
        ("mesh", vec!["Gene Expression Regulation, Bacterial", "Operon"]),
    ]
    .into_iter()
    .collect()
}

fn sentences(doc: &EosDocument) -> SentenceMap {
    let mut sentence_tokenizer = SentenceTokenizer::default();
    let mut tokenizer = ChainSpec::whitespace().build();
    Sentencer::default()
        .to_sentence_documents(doc, &mut sentence_tokenizer, &mut tokenizer, &SpaceJoiner)
        .unwrap()
}

#[test]
fn end_to_end() {
    let doc = EosDocument::new(
        Some("Transcription regulation".to_string()),
        Some("The nirIX gene cluster. A second sentence.".to_string()),
        medline_meta(),
    );

    let map = sentences(&doc);
    assert_eq!(map.len(), 2);

    let mut texts: Vec<&str> = map.values().filter_map(|d| d.text()).collect();
    texts.sort();
    assert_eq!(texts, vec!["A second sentence.", "The nirIX gene cluster."]);

    for sentence in map.values() {
        assert_eq!(sentence.title(), Some("Transcription regulation"));
        assert_eq!(sentence.meta(), &medline_meta());
    }
}

#[test]
fn dedup_round_trip() {
    let original = EosDocument::new(
        Some("Title".to_string()),
        Some("First sentence. Second sentence.".to_string()),
        medline_meta(),
    );
    let with_duplicates = EosDocument::new(
        Some("Title".to_string()),
        Some("First sentence. Second   sentence. First\tsentence. Second sentence.".to_string()),
        medline_meta(),
    );

    let keys: HashSet<String> = sentences(&original).into_keys().collect();
    let keys_dup: HashSet<String> = sentences(&with_duplicates).into_keys().collect();

    assert_eq!(keys.len(), 2);
    assert_eq!(keys, keys_dup);

    // digests are stable across calls
    let again: HashSet<String> = sentences(&original).into_keys().collect();
    assert_eq!(keys, again);
}

#[test]
fn configured_pipeline() {
    let config = Config::from_json(
        r#"{
            "digest_algorithm": "SHA-256",
            "key_field": "sentence_id",
            "sentence_chain": [{"kind": "stop"}, {"kind": "surround"}, {"kind": "case"}]
        }"#,
    )
    .unwrap();
    let pipeline = SentencePipeline::new(&config).unwrap();

    let docs = vec![
        EosDocument::new(
            Some("BACKGROUND: Denitrification".to_string()),
            Some("BACKGROUND: The (nirIX) gene. RESULTS: It is regulated.".to_string()),
            vec![("pmid", vec!["1"])].into_iter().collect(),
        ),
        EosDocument::new(
            None,
            Some("the nirIX GENE. Unrelated.".to_string()),
            vec![("pmid", vec!["2"])].into_iter().collect(),
        ),
    ];

    let map = pipeline.run(docs).unwrap();
    let mut texts: Vec<&str> = map.values().filter_map(|d| d.text()).collect();
    texts.sort();
    assert_eq!(texts, vec!["it is regulated.", "the nirix gene.", "unrelated."]);

    let gene = map
        .values()
        .find(|d| d.text() == Some("the nirix gene."))
        .unwrap();
    // first document's title wins, metadata are merged
    assert_eq!(gene.title(), Some("denitrification"));
    assert_eq!(
        gene.meta().get("pmid"),
        Some(&["1".to_string(), "2".to_string()][..])
    );

    for (digest, doc) in &map {
        assert_eq!(digest.len(), 64);
        assert_eq!(doc.meta().get("sentence_id"), Some(&[digest.clone()][..]));
    }
}
