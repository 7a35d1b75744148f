//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::LookupService;
use crate::config::Settings;
use crate::domain::PathGetter;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};

/// Container holding application settings and I/O boundaries.
///
/// Services are created on demand from the current settings.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> Self {
        let settings = Arc::new(settings);

        Self { settings, fs }
    }

    /// Lookup service configured with the settings' absence policy.
    pub fn lookup_service(&self) -> LookupService {
        LookupService::new(self.fs.clone(), PathGetter::new(self.settings.policy))
    }
}
