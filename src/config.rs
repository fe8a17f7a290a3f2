//! Mapping engine selection flag.
//!
//! The mapping engine comes in an accelerated and a portable variant; which
//! one hosts the process is decided once at startup. The accelerated engine
//! is used only when the `MULTIDICT_NO_EXTENSIONS` environment toggle is
//! unset and the host can run it (see [`host_supports_extensions`]). Views
//! behave identically under both, so this crate only records and reports the
//! outcome.

use std::sync::OnceLock;

/// Environment variable that forces the portable engine when non-empty.
pub const NO_EXTENSIONS_ENV: &str = "MULTIDICT_NO_EXTENSIONS";

/// Which mapping engine variant supplies views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Backend {
    #[default]
    Accelerated,
    Portable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub backend: Backend,
}

impl Config {
    /// Reads [`NO_EXTENSIONS_ENV`] from the process environment and checks
    /// the current host.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), host_supports_extensions())
    }

    /// Builds the config from an arbitrary variable lookup and host check.
    pub fn from_lookup<F>(lookup: F, host_supports_extensions: bool) -> Self
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let no_extensions = lookup(NO_EXTENSIONS_ENV).is_some_and(|v| !v.is_empty());
        let backend = if no_extensions || !host_supports_extensions {
            Backend::Portable
        } else {
            Backend::Accelerated
        };
        Self { backend }
    }

    pub fn use_extensions(&self) -> bool {
        self.backend == Backend::Accelerated
    }
}

/// Whether the hosting runtime can run the accelerated engine.
///
/// False under an interpreter host (Miri), where only the portable engine
/// is available.
pub fn host_supports_extensions() -> bool {
    !cfg!(miri)
}

/// Process-wide config, read from the environment on first use.
pub fn current() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| {
        let config = Config::from_env();
        tracing::debug!(backend = ?config.backend, "mapping engine selected");
        config
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_means_accelerated() {
        let config = Config::from_lookup(|_| None, true);
        assert_eq!(config.backend, Backend::Accelerated);
        assert!(config.use_extensions());
    }

    #[test]
    fn test_any_value_forces_portable() {
        let config = Config::from_lookup(
            |key| {
                assert_eq!(key, NO_EXTENSIONS_ENV);
                Some("1".to_string())
            },
            true,
        );
        assert_eq!(config.backend, Backend::Portable);
        assert!(!config.use_extensions());
    }

    #[test]
    fn test_empty_value_is_ignored() {
        let config = Config::from_lookup(|_| Some(String::new()), true);
        assert_eq!(config.backend, Backend::Accelerated);
    }

    #[test]
    fn test_unsupported_host_forces_portable() {
        let config = Config::from_lookup(|_| None, false);
        assert_eq!(config.backend, Backend::Portable);
        assert!(!config.use_extensions());

        let config = Config::from_lookup(|_| Some("1".to_string()), false);
        assert_eq!(config.backend, Backend::Portable);
    }

    #[test]
    fn test_native_host_supports_extensions() {
        assert_eq!(host_supports_extensions(), !cfg!(miri));
    }

    #[test]
    fn test_current_is_cached() {
        assert!(core::ptr::eq(current(), current()));
    }
}
