//! Marker trait for intents.

/// Something that asks for a state change: a key press turned into a form
/// edit, a confirmed deletion, a timer tick.
pub trait Intent: Send + 'static {}
