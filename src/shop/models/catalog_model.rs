//! Catalog model for MVVM architecture
//!
//! Holds the categories and items fetched from the remote catalog, the
//! active category filter, and the in-flight fetch bookkeeping. Item
//! fetches are stamped with a generation counter so that when the user
//! switches categories faster than responses arrive, only the latest
//! request's response is applied - stale responses are dropped.

use crate::shop::events::ModelEvent;

/// A named grouping used to filter catalog items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// One sellable entity returned by the external catalog.
///
/// Read-only: the renderer and detail view hold transient references
/// and never mutate it.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    /// May be empty; the renderer substitutes a placeholder
    pub description: String,
    pub category: String,
    pub price: f64,
    pub image_url: String,
}

/// Catalog state: categories, items, active filter, fetch bookkeeping
#[derive(Debug, Clone, Default)]
pub struct CatalogModel {
    categories: Vec<Category>,
    items: Vec<CatalogItem>,
    /// Active category filter; None means the unfiltered "All Plants" view
    active_category: Option<String>,
    /// Whether an items fetch is in flight
    loading: bool,
    /// Generation of the most recently issued items fetch
    latest_generation: u64,
}

impl CatalogModel {
    /// Create a new, empty catalog model
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetched categories, in server order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Items of the active view, in server order
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Active category id; None is the unfiltered view
    pub fn active_category(&self) -> Option<&str> {
        self.active_category.as_deref()
    }

    /// Whether an items fetch is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Generation of the most recently issued items fetch
    pub fn latest_generation(&self) -> u64 {
        self.latest_generation
    }

    /// Make a category the active filter and start a new fetch generation.
    ///
    /// Exactly one selection is active at a time - last-selected wins.
    /// Returns the generation the caller must stamp the fetch with.
    pub fn begin_items_fetch(&mut self, category_id: Option<String>) -> u64 {
        self.active_category = category_id;
        self.loading = true;
        self.latest_generation += 1;
        self.latest_generation
    }

    /// Apply a fetched item list if it belongs to the latest generation.
    ///
    /// A response from a superseded fetch is dropped and None is returned;
    /// the in-flight flag stays set because the newer request is still out.
    pub fn apply_items(&mut self, generation: u64, items: Vec<CatalogItem>) -> Option<ModelEvent> {
        if generation != self.latest_generation {
            tracing::debug!(
                "Dropping stale items response (generation {generation}, latest {})",
                self.latest_generation
            );
            return None;
        }

        let count = items.len();
        self.items = items;
        self.loading = false;

        Some(ModelEvent::ItemsLoaded { generation, count })
    }

    /// Record a failed items fetch: empty display, never a crash.
    ///
    /// Stale failures are dropped the same way stale successes are.
    pub fn items_fetch_failed(&mut self, generation: u64, message: String) -> Option<ModelEvent> {
        if generation != self.latest_generation {
            tracing::debug!(
                "Dropping stale items failure (generation {generation}, latest {})",
                self.latest_generation
            );
            return None;
        }

        self.items.clear();
        self.loading = false;

        Some(ModelEvent::CatalogFetchFailed { message })
    }

    /// Apply a fetched category list
    pub fn apply_categories(&mut self, categories: Vec<Category>) -> ModelEvent {
        let count = categories.len();
        self.categories = categories;
        ModelEvent::CategoriesLoaded { count }
    }

    /// Record a failed categories fetch: the sidebar keeps only "All Plants"
    pub fn categories_fetch_failed(&mut self, message: String) -> ModelEvent {
        self.categories.clear();
        ModelEvent::CatalogFetchFailed { message }
    }
}
