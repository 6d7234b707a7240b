//! The rendering engine.
//!
//! A [`Renderer`] pairs a populated registry with a [`RenderConfig`] and
//! writes templates to any [`io::Write`] sink. Literal runs are copied as-is;
//! each resolved placeholder pulls one argument from an [`ArgStream`] and is
//! dispatched on its descriptor: float descriptors are formatted inline, all
//! others call their show function.
//!
//! With argument validation on, output is staged in a buffer and reaches the
//! sink only after the whole template rendered without error.

use std::io;

use showfmt_core::{RenderError, ShowError, ShowValue, View};
use showfmt_modules::write_float;
use showfmt_registry::ShowRegistry;

use crate::args::ArgStream;
use crate::config::RenderConfig;
use crate::scan::{Placeholder, Segment, Segments};

/// Renders templates against a registry.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'r> {
    registry: &'r ShowRegistry,
    config: &'r RenderConfig,
}

impl<'r> Renderer<'r> {
    /// Create a renderer over `registry` using `config`.
    pub fn new(registry: &'r ShowRegistry, config: &'r RenderConfig) -> Self {
        Self { registry, config }
    }

    /// The registry placeholders are resolved against.
    pub fn registry(&self) -> &'r ShowRegistry {
        self.registry
    }

    /// The active configuration.
    pub fn config(&self) -> &'r RenderConfig {
        self.config
    }

    /// Split `template` into literal and placeholder segments.
    pub fn segments<'t>(&self, template: View<'t>) -> Segments<'t, 'r> {
        Segments::new(template, self.registry)
    }

    /// The resolved placeholders of `template`, in scan order.
    ///
    /// Each entry consumes exactly one argument when rendered.
    pub fn plan<'t>(&self, template: View<'t>) -> Vec<Placeholder<'t, 'r>> {
        self.segments(template)
            .filter_map(Segment::into_placeholder)
            .collect()
    }

    /// Check `args` against the placeholders of `template` without writing.
    ///
    /// # Errors
    ///
    /// Returns the first [`RenderError::MissingArgument`] or
    /// [`RenderError::WidthMismatch`], or [`RenderError::UnusedArguments`]
    /// when leftovers are rejected by the configuration.
    pub fn check_arguments(
        &self,
        template: View<'_>,
        args: &[ShowValue<'_>],
    ) -> Result<(), RenderError> {
        let mut stream = ArgStream::new(args);
        for placeholder in self.plan(template) {
            stream.pull(&placeholder.name, placeholder.descriptor.width())?;
        }
        stream.finish(self.config.reject_unused_arguments)
    }

    /// Render `template` with `args` into `out`.
    ///
    /// With argument validation enabled (the default), nothing reaches `out`
    /// unless every placeholder rendered: missing, mistyped or leftover
    /// arguments and show-function errors all leave the sink untouched.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn render(
        &self,
        out: &mut dyn io::Write,
        template: View<'_>,
        args: &[ShowValue<'_>],
    ) -> Result<(), RenderError> {
        if !self.config.validate_arguments {
            return self.write_segments(out, template, args);
        }

        let mut staged = Vec::with_capacity(template.len());
        self.write_segments(&mut staged, template, args)?;
        out.write_all(&staged)?;
        Ok(())
    }

    /// Render into a `String`.
    ///
    /// # Errors
    ///
    /// Everything [`render`](Self::render) can return, plus
    /// [`RenderError::Utf8`] if the output is not valid UTF-8.
    pub fn render_to_string(
        &self,
        template: View<'_>,
        args: &[ShowValue<'_>],
    ) -> Result<String, RenderError> {
        let mut out = Vec::with_capacity(template.len());
        self.write_segments(&mut out, template, args)?;
        Ok(String::from_utf8(out)?)
    }

    fn write_segments(
        &self,
        out: &mut dyn io::Write,
        template: View<'_>,
        args: &[ShowValue<'_>],
    ) -> Result<(), RenderError> {
        let mut stream = ArgStream::new(args);
        for segment in self.segments(template) {
            match segment {
                Segment::Literal(bytes) => out.write_all(bytes)?,
                Segment::Placeholder(placeholder) => {
                    let value =
                        stream.pull(&placeholder.name, placeholder.descriptor.width())?;
                    self.dispatch(out, &placeholder, value)?;
                }
            }
        }
        stream.finish(self.config.reject_unused_arguments)
    }

    fn dispatch(
        &self,
        out: &mut dyn io::Write,
        placeholder: &Placeholder<'_, '_>,
        value: &ShowValue<'_>,
    ) -> Result<(), RenderError> {
        let show_error = |source: ShowError| RenderError::Show {
            placeholder: placeholder.name.to_string(),
            source,
        };

        match (placeholder.descriptor.show(), value) {
            (Some(show), value) => show.call(out, value).map_err(show_error),
            (None, ShowValue::Float(v)) => {
                write_float(out, *v, self.config.float_style)?;
                Ok(())
            }
            (None, other) => Err(show_error(ShowError::mismatch("float", other.type_name()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FloatStyle;
    use showfmt_core::WidthClass;
    use showfmt_modules::default_module;

    fn builtin() -> ShowRegistry {
        let mut registry = ShowRegistry::new();
        registry.install(default_module()).unwrap();
        registry
    }

    fn render(registry: &ShowRegistry, template: &str, args: &[ShowValue<'_>]) -> String {
        let config = RenderConfig::default();
        Renderer::new(registry, &config)
            .render_to_string(View::from(template), args)
            .unwrap()
    }

    #[test]
    fn render_hello_world() {
        let registry = builtin();
        let out = render(
            &registry,
            "Hello, {cstr}! {float}\n",
            &[ShowValue::CStr(c"world"), ShowValue::Float(420.69)],
        );
        assert_eq!(out, "Hello, world! 420.69\n");
    }

    #[test]
    fn render_each_builtin() {
        let registry = builtin();
        assert_eq!(render(&registry, "{int}", &[ShowValue::Int(42)]), "42");
        assert_eq!(render(&registry, "{bool}", &[ShowValue::Bool(true)]), "true");
        assert_eq!(render(&registry, "{bool}", &[ShowValue::Bool(false)]), "false");
        assert_eq!(render(&registry, "{char}", &[ShowValue::Char('c')]), "c");
        assert_eq!(render(&registry, "{str}", &[ShowValue::from("view")]), "view");
        assert_eq!(render(&registry, "{double}", &[ShowValue::Float(0.5)]), "0.5");
    }

    #[test]
    fn render_literal_fallbacks() {
        let registry = builtin();
        assert_eq!(render(&registry, "{nope}", &[]), "{nope}");
        assert_eq!(render(&registry, "a { b", &[]), "a { b");
        assert_eq!(render(&registry, "{}", &[]), "{}");
    }

    #[test]
    fn render_float_style() {
        let registry = builtin();
        let config = RenderConfig::default().with_float_style(FloatStyle::Shortest);
        let renderer = Renderer::new(&registry, &config);
        let out = renderer
            .render_to_string(View::from("{float}"), &[ShowValue::Float(1e-7)])
            .unwrap();
        assert_eq!(out, "0.0000001");

        let config = RenderConfig::default();
        let renderer = Renderer::new(&registry, &config);
        let out = renderer
            .render_to_string(View::from("{float}"), &[ShowValue::Float(1e-7)])
            .unwrap();
        assert_eq!(out, "1e-07");
    }

    #[test]
    fn plan_lists_resolved_placeholders() {
        let registry = builtin();
        let config = RenderConfig::default();
        let renderer = Renderer::new(&registry, &config);

        let plan = renderer.plan(View::from("{int} {nope} {cstr}{float"));
        let names: Vec<_> = plan.iter().map(|p| p.name.to_string()).collect();
        assert_eq!(names, ["int", "cstr"]);
        assert_eq!(plan[1].descriptor.width(), WidthClass::Inline8);
    }

    #[test]
    fn validation_prevents_partial_output() {
        let registry = builtin();
        let config = RenderConfig::default();
        let renderer = Renderer::new(&registry, &config);

        let mut out = Vec::new();
        let err = renderer
            .render(
                &mut out,
                View::from("before {int} after {float}"),
                &[ShowValue::Int(1), ShowValue::Int(2)],
            )
            .unwrap_err();
        assert!(matches!(
            err,
            RenderError::WidthMismatch {
                index: 1,
                expected: WidthClass::FloatSpecial,
                found: WidthClass::Inline4,
                ..
            }
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn without_validation_errors_surface_in_place() {
        let registry = builtin();
        let config = RenderConfig::default().with_validation(false);
        let renderer = Renderer::new(&registry, &config);

        let mut out = Vec::new();
        let err = renderer
            .render(
                &mut out,
                View::from("before {int} after {float}"),
                &[ShowValue::Int(1)],
            )
            .unwrap_err();
        assert!(matches!(err, RenderError::MissingArgument { index: 1, .. }));
        assert_eq!(out, b"before 1 after ");
    }

    #[test]
    fn kind_mismatch_within_width_class() {
        let registry = builtin();
        let config = RenderConfig::default();
        let renderer = Renderer::new(&registry, &config);

        // `&str` is Inline8 like a C string, so it passes the width check and
        // is rejected by the cstr show function.
        let err = renderer
            .render_to_string(View::from("{cstr}"), &[ShowValue::from("world")])
            .unwrap_err();
        assert!(matches!(
            err,
            RenderError::Show {
                ref placeholder,
                source: ShowError::ValueMismatch {
                    expected: "cstr",
                    found: "str"
                }
            } if placeholder == "cstr"
        ));
    }

    #[test]
    fn kind_mismatch_leaves_sink_untouched() {
        let registry = builtin();
        let config = RenderConfig::default();
        let renderer = Renderer::new(&registry, &config);

        let mut out = Vec::new();
        let err = renderer
            .render(
                &mut out,
                View::from("Hello, {cstr}! {float}\n"),
                &[ShowValue::from("world"), ShowValue::Float(420.69)],
            )
            .unwrap_err();
        assert!(err.is_argument_error());
        assert!(out.is_empty());

        let config = RenderConfig::default().with_validation(false);
        let renderer = Renderer::new(&registry, &config);
        let mut out = Vec::new();
        renderer
            .render(
                &mut out,
                View::from("Hello, {cstr}! {float}\n"),
                &[ShowValue::from("world"), ShowValue::Float(420.69)],
            )
            .unwrap_err();
        assert_eq!(out, b"Hello, ");
    }

    #[test]
    fn show_error_after_output_leaves_sink_untouched() {
        let registry = builtin();
        let config = RenderConfig::default();
        let renderer = Renderer::new(&registry, &config);

        let mut out = Vec::new();
        let err = renderer
            .render(
                &mut out,
                View::from("{int} {bool} {char}"),
                &[ShowValue::Int(1), ShowValue::Bool(true), ShowValue::Int(3)],
            )
            .unwrap_err();
        assert!(matches!(err, RenderError::Show { ref placeholder, .. } if placeholder == "char"));
        assert!(out.is_empty());
    }

    #[test]
    fn unused_arguments() {
        let registry = builtin();
        let config = RenderConfig::default();
        let renderer = Renderer::new(&registry, &config);
        let err = renderer
            .render_to_string(View::from("no placeholders"), &[ShowValue::Int(1)])
            .unwrap_err();
        assert!(matches!(
            err,
            RenderError::UnusedArguments {
                consumed: 0,
                supplied: 1
            }
        ));

        let config = RenderConfig::default().allow_unused_arguments();
        let renderer = Renderer::new(&registry, &config);
        let out = renderer
            .render_to_string(View::from("no placeholders"), &[ShowValue::Int(1)])
            .unwrap();
        assert_eq!(out, "no placeholders");
    }

    #[test]
    fn non_utf8_output_rejected_for_strings() {
        let registry = builtin();
        let config = RenderConfig::default();
        let renderer = Renderer::new(&registry, &config);
        let bytes = [0xffu8, 0xfe];

        let mut out = Vec::new();
        renderer
            .render(&mut out, View::from("{str}"), &[ShowValue::Str(View::new(&bytes))])
            .unwrap();
        assert_eq!(out, bytes);

        let err = renderer
            .render_to_string(View::from("{str}"), &[ShowValue::Str(View::new(&bytes))])
            .unwrap_err();
        assert!(matches!(err, RenderError::Utf8(_)));
    }
}
