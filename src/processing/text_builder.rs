//! Canonical text rebuilding.
use itertools::Itertools;

use crate::tokenizers::Token;

/// Rebuilds text from a token sequence.
pub trait TextBuilder {
    fn build(&self, tokens: &[Token]) -> String;
}

/// Joins token texts with a single space.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpaceJoiner;

impl TextBuilder for SpaceJoiner {
    fn build(&self, tokens: &[Token]) -> String {
        tokens.iter().map(Token::text).join(" ")
    }
}
