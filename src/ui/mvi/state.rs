//! Marker trait for reducer-owned state.

/// State is replaced wholesale on each transition, so it must be cheap to
/// clone and comparable; the catalog store compares snapshots to decide
/// whether subscribers need to hear about a dispatch.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
