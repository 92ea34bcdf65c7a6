/// Marker trait for events fed to a reducer: taps, text changes and
/// completed fetches.
pub trait Intent: Send + 'static {}
