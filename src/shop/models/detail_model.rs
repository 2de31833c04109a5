//! Detail overlay model
//!
//! At most one detail overlay exists at a time. Opening an item while
//! another is shown replaces the displayed item in place.

use super::catalog_model::CatalogItem;
use crate::shop::events::ModelEvent;

/// State of the modal item detail overlay
#[derive(Debug, Clone, Default)]
pub struct DetailModel {
    item: Option<CatalogItem>,
}

impl DetailModel {
    /// Create a new model with no overlay shown
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the overlay is currently shown
    pub fn is_open(&self) -> bool {
        self.item.is_some()
    }

    /// The displayed item, when open
    pub fn item(&self) -> Option<&CatalogItem> {
        self.item.as_ref()
    }

    /// Show an item, replacing any currently displayed one in place
    pub fn open(&mut self, item: CatalogItem) -> ModelEvent {
        let event = ModelEvent::DetailOpened {
            item_id: item.id.clone(),
        };
        self.item = Some(item);
        event
    }

    /// Close the overlay; no-op when already closed
    pub fn close(&mut self) -> Option<ModelEvent> {
        self.item.take().map(|_| ModelEvent::DetailClosed)
    }
}
