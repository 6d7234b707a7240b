//! Rendering configuration.
//!
//! Configuration is in-code only; a [`RenderConfig`] lives on the
//! [`Context`](crate::Context) and is read by every render call.

pub use showfmt_modules::FloatStyle;

/// Options that control a render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// How float placeholders are formatted.
    pub float_style: FloatStyle,

    /// Stage output and write it to the sink only once the whole template
    /// rendered. When off, errors are still reported, but only when the
    /// offending placeholder is reached, after earlier output was written.
    pub validate_arguments: bool,

    /// Fail if arguments are left over after the last placeholder.
    pub reject_unused_arguments: bool,
}

impl RenderConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the float style.
    pub fn with_float_style(mut self, style: FloatStyle) -> Self {
        self.float_style = style;
        self
    }

    /// Enable or disable staged output.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate_arguments = validate;
        self
    }

    /// Accept argument lists longer than the template needs.
    pub fn allow_unused_arguments(mut self) -> Self {
        self.reject_unused_arguments = false;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            float_style: FloatStyle::General,
            validate_arguments: true,
            reject_unused_arguments: true,
        }
    }
}
