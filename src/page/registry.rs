//! Typed element lookup.
//!
//! Controllers never walk the element list themselves; they resolve ids
//! through the registry once per initialization and fail loudly when a
//! structural element is missing.  Optional decorations degrade to a skipped
//! binding instead.

use std::collections::HashMap;

use thiserror::Error;

use crate::page::document::Document;
use crate::page::element::{ElementId, Selector};

#[derive(Debug, Error)]
pub enum PageError {
    #[error("required element missing: .{0}")]
    MissingElement(Selector),
}

/// Selector -> element ids, indexed once over a document.
#[derive(Debug, Default)]
pub struct PageRegistry {
    by_selector: HashMap<Selector, Vec<ElementId>>,
}

impl PageRegistry {
    pub fn index(doc: &Document) -> Self {
        let mut by_selector: HashMap<Selector, Vec<ElementId>> = HashMap::new();
        for (id, el) in doc.elements().iter().enumerate() {
            by_selector.entry(el.selector).or_default().push(id);
        }
        Self { by_selector }
    }

    /// First element matching `selector`, or an error the page cannot
    /// animate without.
    pub fn require(&self, selector: Selector) -> Result<ElementId, PageError> {
        self.optional(selector)
            .ok_or(PageError::MissingElement(selector))
    }

    /// First element matching `selector`, if the page has one.
    pub fn optional(&self, selector: Selector) -> Option<ElementId> {
        self.by_selector
            .get(&selector)
            .and_then(|ids| ids.first().copied())
    }

    /// Every element matching `selector`, in document order.
    pub fn all(&self, selector: Selector) -> &[ElementId] {
        self.by_selector
            .get(&selector)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
