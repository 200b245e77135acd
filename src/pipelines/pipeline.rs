//! Pipeline trait.
use crate::error::Error;

/// This trait must be implemented for each Pipeline,
/// and is generic over input and output types so that
/// pipelines consuming or producing different batches can share it.
pub trait Pipeline<I, O> {
    fn run(&self, input: I) -> Result<O, Error>;
}
