//! Document model.
use serde::{Deserialize, Serialize};

use crate::metadata::Meta;

/// A Document is a structure holding a title, a text and metadata.
///
/// Both title and text may be absent: citations without an abstract are common.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct EosDocument {
    title: Option<String>,
    text: Option<String>,
    #[serde(default)]
    meta: Meta,
}

impl EosDocument {
    pub fn new(title: Option<String>, text: Option<String>, meta: Meta) -> Self {
        Self { title, text, meta }
    }

    /// Get the document's title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Get the document's text, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Get a reference to the document's metadata.
    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    /// Get a mutable reference to the document's metadata.
    pub fn meta_mut(&mut self) -> &mut Meta {
        &mut self.meta
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    pub fn set_text(&mut self, text: Option<String>) {
        self.text = text;
    }

    /// Union `other`'s metadata into this document.
    ///
    /// Title and text are kept as is: merged documents are expected to share them.
    pub fn merge(&mut self, other: &EosDocument) {
        self.meta.merge(&other.meta);
    }
}

/// custom debug implementation that shows `text` as lines
/// to ease reading of multi-line abstracts
impl std::fmt::Debug for EosDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lines = self.text.as_ref().map(|t| t.lines().collect::<Vec<&str>>());
        f.debug_struct("EosDocument")
            .field("title", &self.title)
            .field("text (as lines())", &lines)
            .field("meta", &self.meta)
            .finish()
    }
}
