/// Marker trait for UI state.
///
/// `Default` is the state before anything has happened; the dispatcher
/// relies on it to move the old state out with `std::mem::take`.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
