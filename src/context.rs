//! Formatting context.
//!
//! A `Context` owns the show registry and the render configuration. It has
//! two phases:
//!
//! - **Install**: modules and single descriptors are registered through
//!   `&mut self`.
//! - **Sealed**: after [`Context::seal`], the registry is frozen behind an
//!   `Arc` and templates can be rendered, from any number of threads.
//!
//! # Example
//!
//! ```
//! use showfmt::{Context, args};
//!
//! let mut ctx = Context::with_default_modules().unwrap();
//! ctx.seal().unwrap();
//!
//! let out = ctx
//!     .render_to_string("Hello, {cstr}! {float}\n", &args![c"world", 420.69])
//!     .unwrap();
//! assert_eq!(out, "Hello, world! 420.69\n");
//! ```

use std::io;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use showfmt_core::{
    RegistrationError, RenderError, ShowFn, ShowValue, ShowfmtError, View, WidthClass,
};
use showfmt_modules::default_module;
use showfmt_registry::{Module, ShowRegistry};

use crate::config::RenderConfig;
use crate::render::Renderer;
use crate::scan::Placeholder;

/// Owns the registry and configuration used for rendering.
#[derive(Debug)]
pub struct Context {
    /// Registry under construction (consumed on seal)
    builder: Option<ShowRegistry>,
    /// Frozen registry (available after seal)
    registry: Option<Arc<ShowRegistry>>,
    /// Names of installed modules, in install order
    modules: Vec<String>,
    config: RenderConfig,
}

impl Context {
    /// Create an empty context with the default registry capacity.
    pub fn new() -> Self {
        Self::with_registry(ShowRegistry::new())
    }

    /// Create an empty context whose registry holds at most `capacity`
    /// descriptors (`None` for unbounded).
    pub fn with_capacity_limit(capacity: Option<usize>) -> Self {
        Self::with_registry(ShowRegistry::with_capacity_limit(capacity))
    }

    fn with_registry(registry: ShowRegistry) -> Self {
        Self {
            builder: Some(registry),
            registry: None,
            modules: Vec::new(),
            config: RenderConfig::default(),
        }
    }

    /// Create a context with the built-in types installed.
    ///
    /// The context is NOT sealed - call `seal()` when done registering.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in module fails to register.
    pub fn with_default_modules() -> Result<Self, ContextError> {
        let mut ctx = Self::new();
        ctx.install(default_module())?;
        Ok(ctx)
    }

    /// Replace the render configuration.
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// The render configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Mutable access to the render configuration.
    ///
    /// Configuration is independent of the registry and can change after
    /// sealing.
    pub fn config_mut(&mut self) -> &mut RenderConfig {
        &mut self.config
    }

    // ==========================================================================
    // Install phase
    // ==========================================================================

    fn builder(&mut self) -> Result<&mut ShowRegistry, ContextError> {
        self.builder.as_mut().ok_or(ContextError::AlreadySealed)
    }

    /// Install a module.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::AlreadySealed` after `seal()`, or the first
    /// registration error from the module.
    pub fn install(&mut self, module: Module) -> Result<(), ContextError> {
        let name = module.name().to_string();
        self.builder()?.install(module)?;
        self.modules.push(name);
        Ok(())
    }

    /// Register a single descriptor.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        show: Option<ShowFn>,
        width: WidthClass,
    ) -> Result<(), ContextError> {
        self.builder()?.register(name, show, width)?;
        Ok(())
    }

    /// Register a single descriptor with a raw width code (0, 4, or 8).
    pub fn register_raw(
        &mut self,
        name: impl Into<String>,
        show: Option<ShowFn>,
        code: u8,
    ) -> Result<(), ContextError> {
        self.builder()?.register_raw(name, show, code)?;
        Ok(())
    }

    /// Freeze the registry.
    ///
    /// Calling `seal()` multiple times is safe - subsequent calls are no-ops.
    pub fn seal(&mut self) -> Result<(), ContextError> {
        if self.registry.is_some() {
            return Ok(());
        }
        let registry = self.builder.take().unwrap_or_default();
        debug!(
            descriptors = registry.len(),
            longest_name = registry.longest_name(),
            modules = self.modules.len(),
            "sealed show registry"
        );
        self.registry = Some(Arc::new(registry));
        Ok(())
    }

    /// Check if the context has been sealed.
    pub fn is_sealed(&self) -> bool {
        self.registry.is_some()
    }

    /// The frozen registry (available after sealing).
    pub fn registry(&self) -> Option<&Arc<ShowRegistry>> {
        self.registry.as_ref()
    }

    /// Names of installed modules.
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    // ==========================================================================
    // Render phase
    // ==========================================================================

    /// A renderer over the sealed registry.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::NotSealed` if `seal()` has not been called.
    pub fn renderer(&self) -> Result<Renderer<'_>, ContextError> {
        let registry = self.registry.as_deref().ok_or(ContextError::NotSealed)?;
        Ok(Renderer::new(registry, &self.config))
    }

    /// Render `template` with `args` into `out`.
    pub fn render(
        &self,
        out: &mut dyn io::Write,
        template: &str,
        args: &[ShowValue<'_>],
    ) -> Result<(), ContextError> {
        self.render_view(out, View::from(template), args)
    }

    /// Render a template given as a byte view.
    pub fn render_view(
        &self,
        out: &mut dyn io::Write,
        template: View<'_>,
        args: &[ShowValue<'_>],
    ) -> Result<(), ContextError> {
        self.renderer()?.render(out, template, args)?;
        Ok(())
    }

    /// Render into a `String`.
    pub fn render_to_string(
        &self,
        template: &str,
        args: &[ShowValue<'_>],
    ) -> Result<String, ContextError> {
        Ok(self.renderer()?.render_to_string(View::from(template), args)?)
    }

    /// The placeholders `template` resolves to, in scan order.
    pub fn placeholders<'t>(
        &self,
        template: &'t str,
    ) -> Result<Vec<Placeholder<'t, '_>>, ContextError> {
        Ok(self.renderer()?.plan(View::from(template)))
    }

    /// Check `args` against `template` without rendering.
    pub fn check_arguments(
        &self,
        template: &str,
        args: &[ShowValue<'_>],
    ) -> Result<(), ContextError> {
        self.renderer()?
            .check_arguments(View::from(template), args)?;
        Ok(())
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur during context operations.
#[derive(Debug, Error)]
pub enum ContextError {
    /// Context is already sealed - cannot register
    #[error("context is already sealed - cannot register types after seal()")]
    AlreadySealed,

    /// Context is not sealed - must call seal() before rendering
    #[error("context is not sealed - call seal() before rendering")]
    NotSealed,

    /// A descriptor failed to register
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    /// Rendering failed
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl ContextError {
    /// Convert to the top-level `ShowfmtError`.
    ///
    /// Returns `None` for phase errors (`AlreadySealed`, `NotSealed`) that
    /// carry no underlying error.
    pub fn into_error(self) -> Option<ShowfmtError> {
        match self {
            ContextError::Registration(err) => Some(err.into()),
            ContextError::Render(err) => Some(err.into()),
            ContextError::AlreadySealed | ContextError::NotSealed => None,
        }
    }
}
