//! Well-known storage keys

/// Top-level blob holding per-installation user data.
pub const INSTALLATION: &str = "installation";
