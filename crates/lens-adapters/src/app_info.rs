//! Application metadata capability

pub trait AppDataAdapter: Send + Sync {
    /// Version string reported in logs and generated reports.
    fn get_version(&self) -> String;
}

/// Reports the version baked in at build time.
pub struct BuildInfoAppDataAdapter;

impl AppDataAdapter for BuildInfoAppDataAdapter {
    fn get_version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_nonempty_semver() {
        let version = BuildInfoAppDataAdapter.get_version();
        assert_eq!(version.split('.').count(), 3);
    }
}
