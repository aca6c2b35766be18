//! Interceptor configuration.
//!
//! # Example
//!
//! ```ignore
//! use websocket_interceptor::{EmitterScope, InterceptorOptions, Platform};
//!
//! let options = InterceptorOptions::new().with_scope(EmitterScope::for_platform(Platform::Ios));
//! assert_eq!(options.scope, EmitterScope::Module);
//! ```

// ============================================================================
// Platform
// ============================================================================

/// Host platform, for picking a conventional [`EmitterScope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// iOS host.
    Ios,
    /// Android host.
    Android,
    /// Any other host.
    Other,
}

// ============================================================================
// EmitterScope
// ============================================================================

/// How the interceptor subscribes to transport events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmitterScope {
    /// Subscribe without a target; receive events from every origin.
    #[default]
    Global,

    /// Subscribe with the transport module as target; receive only its events.
    Module,
}

impl EmitterScope {
    /// Returns the scope conventionally used on `platform`.
    ///
    /// iOS emitters deliver per module, so listeners there need the module
    /// as target. Other hosts broadcast.
    #[inline]
    #[must_use]
    pub const fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Ios => Self::Module,
            Platform::Android | Platform::Other => Self::Global,
        }
    }

    /// Returns the listener target for a module named `module_name`.
    #[inline]
    #[must_use]
    pub fn target(self, module_name: &str) -> Option<&str> {
        match self {
            Self::Global => None,
            Self::Module => Some(module_name),
        }
    }
}

// ============================================================================
// InterceptorOptions
// ============================================================================

/// Interceptor configuration options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterceptorOptions {
    /// Event subscription scope.
    pub scope: EmitterScope,
}

impl InterceptorOptions {
    /// Creates options with default settings.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scope: EmitterScope::Global,
        }
    }

    /// Sets the event subscription scope.
    #[inline]
    #[must_use]
    pub fn with_scope(mut self, scope: EmitterScope) -> Self {
        self.scope = scope;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
