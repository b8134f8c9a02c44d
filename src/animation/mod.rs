//! Eased, cancellable morphs between silhouettes.

/// Frame timestamp sources.
pub mod clock;
/// Easing curves.
pub mod ease;
/// Frame-driven morph engine.
pub mod morph;
