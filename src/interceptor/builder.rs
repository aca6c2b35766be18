//! Builder pattern for interceptor configuration.
//!
//! # Example
//!
//! ```ignore
//! let interceptor = Interceptor::builder()
//!     .module(Arc::clone(&module))
//!     .events(Arc::new(hub.clone()))
//!     .scope(EmitterScope::Module)
//!     .build()?;
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::events::EventSource;
use crate::transport::WebSocketModule;

use super::Interceptor;
use super::options::{EmitterScope, InterceptorOptions};

// ============================================================================
// InterceptorBuilder
// ============================================================================

/// Builder for configuring an [`Interceptor`].
///
/// Use [`Interceptor::builder()`] to create a new builder.
#[derive(Default, Clone)]
pub struct InterceptorBuilder {
    /// Transport module to intercept.
    module: Option<Arc<WebSocketModule>>,
    /// Event source the module's events arrive on.
    events: Option<Arc<dyn EventSource>>,
    /// Configuration options.
    options: InterceptorOptions,
}

impl InterceptorBuilder {
    /// Creates a new builder with no configuration.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the transport module to intercept.
    #[inline]
    #[must_use]
    pub fn module(mut self, module: Arc<WebSocketModule>) -> Self {
        self.module = Some(module);
        self
    }

    /// Sets the event source.
    #[inline]
    #[must_use]
    pub fn events(mut self, events: Arc<dyn EventSource>) -> Self {
        self.events = Some(events);
        self
    }

    /// Sets the event subscription scope.
    #[inline]
    #[must_use]
    pub fn scope(mut self, scope: EmitterScope) -> Self {
        self.options.scope = scope;
        self
    }

    /// Replaces all options.
    #[inline]
    #[must_use]
    pub fn options(mut self, options: InterceptorOptions) -> Self {
        self.options = options;
        self
    }

    /// Builds the interceptor, initially disabled.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if the module or event source is not set
    pub fn build(self) -> Result<Interceptor> {
        let module = self.module.ok_or_else(|| {
            Error::config(
                "Transport module is required. Use .module() to set it.\n\
                 Example: Interceptor::builder().module(Arc::clone(&module))",
            )
        })?;

        let events = self.events.ok_or_else(|| {
            Error::config(
                "Event source is required. Use .events() to set it.\n\
                 Example: Interceptor::builder().events(Arc::new(hub))",
            )
        })?;

        Ok(Interceptor::new(module, events, self.options))
    }
}

impl fmt::Debug for InterceptorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterceptorBuilder")
            .field("module", &self.module)
            .field("events", &self.events.is_some())
            .field("options", &self.options)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use crate::events::EventHub;
    use crate::test_support::RecordingTransport;

    fn module() -> Arc<WebSocketModule> {
        Arc::new(WebSocketModule::new("WebSocketModule", RecordingTransport::new()))
    }

    #[test]
    fn test_new_creates_empty_builder() {
        let builder = InterceptorBuilder::new();
        assert!(builder.module.is_none());
        assert!(builder.events.is_none());
        assert_eq!(builder.options, InterceptorOptions::default());
    }

    #[test]
    fn test_scope_sets_option() {
        let builder = InterceptorBuilder::new().scope(EmitterScope::Module);
        assert_eq!(builder.options.scope, EmitterScope::Module);
    }

    #[test]
    fn test_build_fails_without_module() {
        let err = InterceptorBuilder::new()
            .events(Arc::new(EventHub::new()))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("Transport module"));
    }

    #[test]
    fn test_build_fails_without_events() {
        let err = InterceptorBuilder::new().module(module()).build().unwrap_err();
        assert!(err.to_string().contains("Event source"));
    }

    #[test]
    fn test_build_starts_disabled() {
        let interceptor = InterceptorBuilder::new()
            .module(module())
            .events(Arc::new(EventHub::new()))
            .options(InterceptorOptions::new().with_scope(EmitterScope::Module))
            .build()
            .unwrap();

        assert!(!interceptor.is_interceptor_enabled());
        assert_eq!(interceptor.options().scope, EmitterScope::Module);
    }
}
