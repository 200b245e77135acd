//! Tokenizer traits.
use crate::error::Error;

use super::Token;

/// Pull-based token producer.
///
/// `Ok(None)` marks the end of the stream. Once exhausted, a tokenizer keeps
/// returning `Ok(None)` until it is reset (see [ResettableTokenizer]).
pub trait Tokenizer {
    fn next_token(&mut self) -> Result<Option<Token>, Error>;

    /// Iterate over remaining tokens.
    fn tokens(&mut self) -> Tokens<'_, Self>
    where
        Self: Sized,
    {
        Tokens::new(self)
    }
}

/// Tokenizer that can be rebound to a new input without being rebuilt.
///
/// Filters forward `reset` to the tokenizer they wrap, so that resetting
/// the outermost filter of a chain resets the whole chain.
pub trait ResettableTokenizer: Tokenizer {
    fn reset(&mut self, input: &str);
}

impl<T: Tokenizer + ?Sized> Tokenizer for Box<T> {
    fn next_token(&mut self) -> Result<Option<Token>, Error> {
        (**self).next_token()
    }
}

impl<T: ResettableTokenizer + ?Sized> ResettableTokenizer for Box<T> {
    fn reset(&mut self, input: &str) {
        (**self).reset(input)
    }
}

/// Iterator over the tokens of a [Tokenizer].
///
/// Stops after the first error.
pub struct Tokens<'a, T: ?Sized> {
    tokenizer: &'a mut T,
    done: bool,
}

impl<'a, T: Tokenizer + ?Sized> Tokens<'a, T> {
    pub fn new(tokenizer: &'a mut T) -> Self {
        Self {
            tokenizer,
            done: false,
        }
    }
}

impl<'a, T: Tokenizer + ?Sized> Iterator for Tokens<'a, T> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.tokenizer.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Drain a tokenizer into a [Vec].
pub fn collect_tokens<T: Tokenizer + ?Sized>(tokenizer: &mut T) -> Result<Vec<Token>, Error> {
    Tokens::new(tokenizer).collect()
}

/// Reset `tokenizer` over `input` and drain it.
pub fn tokenize<T: ResettableTokenizer + ?Sized>(
    tokenizer: &mut T,
    input: &str,
) -> Result<Vec<Token>, Error> {
    tokenizer.reset(input);
    collect_tokens(tokenizer)
}
