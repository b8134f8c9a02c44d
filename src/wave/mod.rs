//! Seeded silhouette synthesis and path building.

/// Deterministic point generation.
pub mod generate;
/// Generator parameters and enums.
pub mod params;
/// Closed-region path construction.
pub mod path;
