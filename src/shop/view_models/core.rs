//! # Core ViewModel
//!
//! Owns the models plus focus and selection state. The cart is reached
//! only through this view model - there is no ambient singleton - so the
//! whole storefront state can be constructed and exercised in isolation.

use crate::shop::events::{AppMode, EventBus, ModelEvent, Pane, ViewEvent};
use crate::shop::models::{CartModel, CatalogModel, DetailModel};

/// The central view model coordinating storefront state
pub struct ViewModel {
    pub(super) cart: CartModel,
    pub(super) catalog: CatalogModel,
    pub(super) detail: DetailModel,
    pub(super) current_pane: Pane,
    pub(super) mode: AppMode,
    /// Selection in the sidebar; 0 is the "All Plants" entry
    pub(super) category_index: usize,
    pub(super) item_index: usize,
    pub(super) cart_index: usize,
    terminal_size: (u16, u16),
    status_message: Option<String>,
    verbose: bool,
    pending_view_events: Vec<ViewEvent>,
    event_bus: Option<Box<dyn EventBus>>,
}

impl ViewModel {
    /// Create a view model with an empty cart
    pub fn new() -> Self {
        Self::with_cart(CartModel::new())
    }

    /// Create a view model around an injected cart.
    ///
    /// The seam tests use to start from a pre-filled cart.
    pub fn with_cart(cart: CartModel) -> Self {
        Self {
            cart,
            catalog: CatalogModel::new(),
            detail: DetailModel::new(),
            current_pane: Pane::Categories,
            mode: AppMode::Browse,
            category_index: 0,
            item_index: 0,
            cart_index: 0,
            terminal_size: (80, 24),
            status_message: None,
            verbose: false,
            pending_view_events: Vec::new(),
            event_bus: None,
        }
    }

    /// Current interaction mode
    pub fn mode(&self) -> AppMode {
        self.mode
    }

    /// Currently focused pane
    pub fn current_pane(&self) -> Pane {
        self.current_pane
    }

    /// The shopping cart
    pub fn cart(&self) -> &CartModel {
        &self.cart
    }

    /// The catalog state
    pub fn catalog(&self) -> &CatalogModel {
        &self.catalog
    }

    /// The detail overlay state
    pub fn detail(&self) -> &DetailModel {
        &self.detail
    }

    /// Selected sidebar entry (0 is "All Plants")
    pub fn category_index(&self) -> usize {
        self.category_index
    }

    /// Selected item card
    pub fn item_index(&self) -> usize {
        self.item_index
    }

    /// Selected cart line
    pub fn cart_index(&self) -> usize {
        self.cart_index
    }

    /// Number of sidebar entries including "All Plants"
    pub fn category_entry_count(&self) -> usize {
        self.catalog.categories().len() + 1
    }

    /// Transient status bar message, if any
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Set the transient status bar message
    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.push_view_event(ViewEvent::StatusBarUpdateRequired);
    }

    /// Current terminal size
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Record a terminal resize; forces a full repaint
    pub fn update_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
        self.push_view_event(ViewEvent::FullRedrawRequired);
    }

    /// Whether verbose status messages were requested
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Set verbose mode from command line args
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Attach an event bus for model event observers
    pub fn set_event_bus(&mut self, bus: Box<dyn EventBus>) {
        self.event_bus = Some(bus);
    }

    /// Cycle focus to the next pane
    pub fn switch_pane(&mut self) {
        let old_pane = self.current_pane;
        self.current_pane = self.current_pane.next();

        self.publish_model_event(ModelEvent::PaneSwitched {
            old_pane,
            new_pane: self.current_pane,
        });

        // Focus highlights live in both content areas and the status bar
        self.push_view_event(ViewEvent::CatalogRedrawRequired);
        self.push_view_event(ViewEvent::CartRedrawRequired);
        self.push_view_event(ViewEvent::StatusBarUpdateRequired);
    }

    /// Drain the view events collected since the last call
    pub fn collect_pending_view_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.pending_view_events)
    }

    pub(super) fn push_view_event(&mut self, event: ViewEvent) {
        if !self.pending_view_events.contains(&event) {
            self.pending_view_events.push(event);
        }
    }

    pub(super) fn publish_model_event(&mut self, event: ModelEvent) {
        tracing::debug!("Model event: {event:?}");
        if let Some(bus) = self.event_bus.as_mut() {
            bus.publish_model_event(event);
        }
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new()
    }
}
