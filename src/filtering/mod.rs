/*! Token filters

Filters wrap an upstream [crate::tokenizers::Tokenizer] and are tokenizers themselves,
so that they can be stacked:

```text
Whitespace -> Stop -> Surround -> Case
```

Every filter forwards [crate::tokenizers::ResettableTokenizer::reset] to the tokenizer it wraps.

Filter order matters: [StopFilter] compares raw token text with its stop words,
so it has to sit *below* a lowercasing [CaseFilter] when stop words are uppercase.
! */
mod case;
mod stop;
mod surround;

pub use case::{CaseFilter, CaseMode};
pub use stop::{StopFilter, STRUCTURE_WORDS};
pub use surround::{Surround, SurroundFilter, DEFAULT_SURROUND_CHARS};
