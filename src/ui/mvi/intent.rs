//! Marker trait for intents.

/// Something that happened: a control changed, a card was picked, the
/// startup fetch resolved.
pub trait Intent: Send + 'static {}
