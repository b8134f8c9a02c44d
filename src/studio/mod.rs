//! Editor state tying config, morphing and export together.

/// Serializable editor config.
pub mod config;
/// Interactive session.
pub mod session;
