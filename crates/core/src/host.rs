use crate::error::AppError;
use folio_types::Profile;
use std::sync::Arc;

/// Owns the page root and attaches behaviour to the mounted markup.
///
/// The controller calls these in a fixed order: [`mount`](Self::mount), then
/// [`wire_interactions`](Self::wire_interactions), then
/// [`activate_reveal`](Self::activate_reveal). On failure it calls `mount`
/// once more with the error state.
pub trait PageHost {
    /// Replaces the entire content of the page root and clears its loading state.
    fn mount(&mut self, markup: &str);

    /// Attaches navigation, emphasis and export handlers. Fails only when a
    /// mandatory navigation element is missing.
    fn wire_interactions(&mut self, profile: &Arc<Profile>) -> Result<(), AppError>;

    /// Starts observing reveal blocks, or reveals them all at once when no
    /// viewport watcher exists.
    fn activate_reveal(&mut self);
}
