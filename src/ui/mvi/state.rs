/// Marker trait for screen state.
///
/// States are replaced, never patched in place, so a view can detect a
/// change by comparing the old and new values.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
