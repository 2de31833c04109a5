//! # View Events
//!
//! Events that tell the controller which screen areas need repainting.
//! Collected by the view model as state changes, then grouped by the
//! controller so each area is drawn at most once per input cycle.

/// Events emitted when view updates are needed
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// Full screen redraw required (most expensive - terminal resize, etc)
    FullRedrawRequired,

    /// Category sidebar and item cards need redrawing
    CatalogRedrawRequired,

    /// Cart pane needs redrawing (lines, subtotals, total)
    CartRedrawRequired,

    /// Detail overlay needs redrawing (opened or replaced in place)
    DetailRedrawRequired,

    /// Status bar needs updating
    StatusBarUpdateRequired,
}
