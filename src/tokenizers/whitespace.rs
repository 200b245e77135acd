//! Whitespace tokenizer.
use crate::error::Error;

use super::{ResettableTokenizer, Token, Tokenizer};

/// Splits its input on runs of whitespace.
///
/// This is the source tokenizer of every [super::Chain].
/// The input buffer is reused between resets.
#[derive(Debug, Default)]
pub struct WhitespaceTokenizer {
    input: String,
    pos: usize,
}

impl WhitespaceTokenizer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            pos: 0,
        }
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn next_token(&mut self) -> Result<Option<Token>, Error> {
        let rest = &self.input[self.pos..];

        // skip leading whitespace
        let start = match rest.find(|c: char| !c.is_whitespace()) {
            Some(offset) => self.pos + offset,
            None => {
                self.pos = self.input.len();
                return Ok(None);
            }
        };

        let end = self.input[start..]
            .find(char::is_whitespace)
            .map_or(self.input.len(), |offset| start + offset);

        self.pos = end;
        Ok(Some(Token::new(&self.input[start..end], start, end)))
    }
}

impl ResettableTokenizer for WhitespaceTokenizer {
    fn reset(&mut self, input: &str) {
        self.input.clear();
        self.input.push_str(input);
        self.pos = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::WhitespaceTokenizer;
    use crate::tokenizers::{collect_tokens, ResettableTokenizer, Tokenizer};

    fn texts(t: &mut WhitespaceTokenizer) -> Vec<String> {
        collect_tokens(t)
            .unwrap()
            .into_iter()
            .map(|t| t.into_text())
            .collect()
    }

    #[test]
    fn split_runs() {
        let mut t = WhitespaceTokenizer::new("  The\tnirIX \n gene  cluster. ");
        assert_eq!(texts(&mut t), vec!["The", "nirIX", "gene", "cluster."]);
    }

    #[test]
    fn offsets() {
        let input = "a  bc\u{a0}déf";
        let mut t = WhitespaceTokenizer::new(input);
        let tokens = collect_tokens(&mut t).unwrap();
        for token in &tokens {
            assert_eq!(&input[token.span()], token.text());
        }
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn empty() {
        let mut t = WhitespaceTokenizer::new(" \n\t ");
        assert!(t.next_token().unwrap().is_none());
        // stays exhausted
        assert!(t.next_token().unwrap().is_none());
    }

    #[test]
    fn reset() {
        let mut t = WhitespaceTokenizer::new("foo bar");
        assert_eq!(t.next_token().unwrap().unwrap().text(), "foo");
        t.reset("baz quux");
        assert_eq!(texts(&mut t), vec!["baz", "quux"]);
        t.reset("");
        assert!(texts(&mut t).is_empty());
    }
}
