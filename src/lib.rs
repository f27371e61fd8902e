pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod web;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::{seed, ActivityRegistry};
use crate::error::SeedError;

/// Package version plus build timestamp, refreshed on every rebuild.
pub fn build_id() -> &'static str {
    env!("ACTIVITIES_BUILD_ID")
}

/// Builds the registry from the configured seed file, or the built-in seed.
pub fn load_registry(config: &AppConfig) -> Result<Arc<ActivityRegistry>, SeedError> {
    let seed = match config.seed_file.as_deref() {
        Some(path) => seed::load_seed_file(path)?,
        None => seed::default_seed()?,
    };
    Ok(Arc::new(ActivityRegistry::new(seed)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_id_carries_version_and_timestamp() {
        let id = build_id();
        let stamp = id
            .strip_prefix(concat!(env!("CARGO_PKG_VERSION"), "-"))
            .unwrap();
        assert!(!stamp.is_empty());
        assert!(stamp == "dev" || stamp.chars().all(|c| c.is_ascii_digit()));
    }
}
