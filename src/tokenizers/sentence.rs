//! Sentence tokenizers.
//!
//! Sentence tokenizers work on a whole document text and emit one
//! [TokenType::Structural] token per sentence.
//! Emitted sentences are trimmed; offsets point into the reset input.
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::error::Error;

use super::{ResettableTokenizer, Token, TokenType, Tokenizer};

const TERMINATORS: [char; 3] = ['.', '!', '?'];
const CLOSING: [char; 4] = ['"', '\'', ')', ']'];

/// Punctuation-based sentence splitter.
///
/// A sentence ends after a run of `.`, `!` or `?` (optionally followed by closing quotes/brackets)
/// that is itself followed by whitespace or by the end of the text.
/// No split happens if the next word starts with a lowercase letter, which keeps
/// abbreviations such as `e.g. the` inside their sentence.
#[derive(Debug, Default)]
pub struct SentenceTokenizer {
    input: String,
    pos: usize,
}

impl SentenceTokenizer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            pos: 0,
        }
    }

    /// Get the end offset of the sentence starting at `start`.
    fn boundary(&self, start: usize) -> usize {
        let text = &self.input[start..];
        let mut chars = text.char_indices().peekable();

        while let Some((idx, c)) = chars.next() {
            if !TERMINATORS.contains(&c) {
                continue;
            }

            // swallow the whole terminator run (`?!`, `...`, `.")`)
            let mut end = idx + c.len_utf8();
            while let Some(&(next_idx, next)) = chars.peek() {
                if TERMINATORS.contains(&next) || CLOSING.contains(&next) {
                    end = next_idx + next.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }

            let after = &text[end..];
            match after.chars().next() {
                None => return start + end,
                Some(next) if next.is_whitespace() => match after.trim_start().chars().next() {
                    Some(word_start) if word_start.is_lowercase() => continue,
                    _ => return start + end,
                },
                // terminator inside a token (`1.5`, `p.A12`)
                Some(_) => continue,
            }
        }

        self.input.len()
    }
}

impl Tokenizer for SentenceTokenizer {
    fn next_token(&mut self) -> Result<Option<Token>, Error> {
        let start = match self.input[self.pos..].find(|c: char| !c.is_whitespace()) {
            Some(offset) => self.pos + offset,
            None => {
                self.pos = self.input.len();
                return Ok(None);
            }
        };

        let end = self.boundary(start);
        let sentence = self.input[start..end].trim_end();
        let token =
            Token::new(sentence, start, start + sentence.len()).with_kind(TokenType::Structural);

        self.pos = end;
        Ok(Some(token))
    }
}

impl ResettableTokenizer for SentenceTokenizer {
    fn reset(&mut self, input: &str) {
        self.input.clear();
        self.input.push_str(input);
        self.pos = 0;
    }
}

/// Sentence splitter following Unicode sentence boundaries (UAX#29).
#[derive(Debug, Default)]
pub struct UnicodeSentenceTokenizer {
    input: String,
    bounds: Vec<(usize, usize)>,
    idx: usize,
}

impl UnicodeSentenceTokenizer {
    pub fn new(input: &str) -> Self {
        let mut tokenizer = Self::default();
        tokenizer.reset(input);
        tokenizer
    }
}

impl Tokenizer for UnicodeSentenceTokenizer {
    fn next_token(&mut self) -> Result<Option<Token>, Error> {
        match self.bounds.get(self.idx) {
            Some(&(start, end)) => {
                self.idx += 1;
                Ok(Some(
                    Token::new(&self.input[start..end], start, end)
                        .with_kind(TokenType::Structural),
                ))
            }
            None => Ok(None),
        }
    }
}

impl ResettableTokenizer for UnicodeSentenceTokenizer {
    fn reset(&mut self, input: &str) {
        self.input.clear();
        self.input.push_str(input);
        self.bounds.clear();
        self.idx = 0;

        for (offset, sentence) in self.input.split_sentence_bound_indices() {
            let trimmed = sentence.trim();
            if trimmed.is_empty() {
                continue;
            }
            let start = offset + (sentence.len() - sentence.trim_start().len());
            self.bounds.push((start, start + trimmed.len()));
        }
    }
}

/// Available sentence splitters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SentenceSplitter {
    #[default]
    Punctuation,
    Unicode,
}

impl SentenceSplitter {
    /// Build an empty sentence tokenizer of this kind.
    pub fn build(&self) -> Box<dyn ResettableTokenizer + Send> {
        match self {
            SentenceSplitter::Punctuation => Box::new(SentenceTokenizer::default()),
            SentenceSplitter::Unicode => Box::new(UnicodeSentenceTokenizer::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SentenceSplitter, SentenceTokenizer, UnicodeSentenceTokenizer};
    use crate::tokenizers::{collect_tokens, tokenize, Tokenizer, TokenType};

    fn sentences<T: Tokenizer>(t: &mut T) -> Vec<String> {
        collect_tokens(t)
            .unwrap()
            .into_iter()
            .map(|t| t.into_text())
            .collect()
    }

    #[test]
    fn two_sentences() {
        let mut t = SentenceTokenizer::new("The nirIX gene cluster. A second sentence.");
        assert_eq!(
            sentences(&mut t),
            vec!["The nirIX gene cluster.", "A second sentence."]
        );
    }

    #[test]
    fn kind_and_offsets() {
        let input = "  First one!  Second one?\nThird";
        let mut t = SentenceTokenizer::new(input);
        let tokens = collect_tokens(&mut t).unwrap();
        assert_eq!(tokens.len(), 3);
        for token in &tokens {
            assert_eq!(token.kind(), TokenType::Structural);
            assert_eq!(&input[token.span()], token.text());
        }
        assert_eq!(tokens[2].text(), "Third");
    }

    #[test]
    fn inner_dots_and_abbreviations() {
        let mut t = SentenceTokenizer::new(
            "Levels rose 1.5 fold, e.g. in the liver. Mutation p.A12V was found.",
        );
        assert_eq!(
            sentences(&mut t),
            vec![
                "Levels rose 1.5 fold, e.g. in the liver.",
                "Mutation p.A12V was found."
            ]
        );
    }

    #[test]
    fn closing_quotes() {
        let mut t = SentenceTokenizer::new("He said \"stop.\" Then left (quickly.) End");
        assert_eq!(
            sentences(&mut t),
            vec!["He said \"stop.\"", "Then left (quickly.)", "End"]
        );
    }

    #[test]
    fn empty_input() {
        let mut t = SentenceTokenizer::new("   ");
        assert!(t.next_token().unwrap().is_none());
    }

    #[test]
    fn unicode_splitter() {
        let input = "The nirIX gene cluster. A second sentence.";
        let mut t = UnicodeSentenceTokenizer::new(input);
        let tokens = collect_tokens(&mut t).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text(), "The nirIX gene cluster.");
        assert_eq!(tokens[1].text(), "A second sentence.");
        assert_eq!(&input[tokens[1].span()], tokens[1].text());
    }

    #[test]
    fn registry() {
        for splitter in [SentenceSplitter::Punctuation, SentenceSplitter::Unicode] {
            let mut t = splitter.build();
            let tokens = tokenize(&mut t, "One. Two.").unwrap();
            assert_eq!(tokens.len(), 2);
        }
    }
}
