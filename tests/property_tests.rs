//! Property-based tests for template rendering.

use proptest::prelude::*;
use showfmt::{
    Context, FloatStyle, RenderConfig, ShowRegistry, ShowValue, View, args, default_module,
};

const BUILTIN_NAMES: [&str; 7] = ["int", "str", "bool", "char", "cstr", "float", "double"];

fn builtin() -> Context {
    let mut ctx = Context::with_default_modules().unwrap();
    ctx.seal().unwrap();
    ctx
}

fn render_bytes(ctx: &Context, template: &str, args: &[ShowValue<'_>]) -> Vec<u8> {
    let mut out = Vec::new();
    ctx.render(&mut out, template, args).unwrap();
    out
}

/// Names that are never registered by the built-in module.
fn unregistered_name() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_ ]{0,11}".prop_filter("must not be a built-in name", |name| {
        !BUILTIN_NAMES.contains(&name.as_str())
    })
}

proptest! {
    #[test]
    fn text_without_braces_is_copied(template in "[^{]*") {
        let ctx = builtin();
        prop_assert_eq!(render_bytes(&ctx, &template, &[]), template.as_bytes());
    }

    #[test]
    fn unregistered_placeholder_is_copied(name in unregistered_name()) {
        let ctx = builtin();
        let template = format!("{{{name}}}");
        prop_assert_eq!(render_bytes(&ctx, &template, &[]), template.as_bytes());
    }

    #[test]
    fn unterminated_brace_preserves_length(prefix in "[^{}]*", suffix in "[^}]*") {
        let ctx = builtin();
        let template = format!("{prefix}{{{suffix}");
        let out = render_bytes(&ctx, &template, &[]);
        prop_assert_eq!(out.len(), template.len());
        prop_assert_eq!(out, template.as_bytes());
    }

    #[test]
    fn int_matches_display(n in any::<i32>()) {
        let ctx = builtin();
        prop_assert_eq!(
            ctx.render_to_string("{int}", &args![n]).unwrap(),
            n.to_string()
        );
    }

    #[test]
    fn char_matches_display(c in any::<char>()) {
        let ctx = builtin();
        prop_assert_eq!(
            ctx.render_to_string("{char}", &args![c]).unwrap(),
            c.to_string()
        );
    }

    #[test]
    fn shortest_float_round_trips(x in any::<f64>().prop_filter("finite", |x| x.is_finite())) {
        let ctx = builtin()
            .with_config(RenderConfig::new().with_float_style(FloatStyle::Shortest));
        let out = ctx.render_to_string("{double}", &args![x]).unwrap();
        prop_assert_eq!(out.parse::<f64>().unwrap(), x);
    }

    #[test]
    fn one_argument_per_placeholder(values in prop::collection::vec(any::<i32>(), 0..16)) {
        let ctx = builtin();
        let template = "{int},".repeat(values.len());
        let args: Vec<_> = values.iter().copied().map(ShowValue::from).collect();
        let expected: String = values.iter().map(|n| format!("{n},")).collect();
        prop_assert_eq!(ctx.render_to_string(&template, &args).unwrap(), expected);
    }

    #[test]
    fn indexed_lookup_matches_linear_scan(name in "[a-z]{0,6}") {
        let mut registry = ShowRegistry::new();
        registry.install(default_module()).unwrap();
        registry.install(default_module()).unwrap();

        let view = View::from(name.as_str());
        let fast = registry.lookup(&view).map(|d| d as *const _);
        let linear = registry.lookup_linear(&view).map(|d| d as *const _);
        prop_assert_eq!(fast, linear);
    }
}
