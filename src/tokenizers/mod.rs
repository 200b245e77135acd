/*! Tokens and tokenizers.

Tokenizers are pull-based: each call to [Tokenizer::next_token] yields the next [Token],
or `None` once the input is exhausted.

- Source tokenizers read raw text
  ([WhitespaceTokenizer], [SentenceTokenizer], [UnicodeSentenceTokenizer]),
- filters (see [crate::filtering]) wrap another tokenizer,
- [Chain] assembles filters on top of a whitespace tokenizer from a [ChainSpec].
!*/
mod chain;
mod sentence;
mod token;
mod tokenizer;
mod whitespace;

pub use chain::{Chain, ChainSpec, FilterKind};
pub use sentence::{SentenceSplitter, SentenceTokenizer, UnicodeSentenceTokenizer};
pub use token::{Token, TokenType};
pub use tokenizer::{collect_tokens, tokenize, ResettableTokenizer, Tokenizer, Tokens};
pub use whitespace::WhitespaceTokenizer;
