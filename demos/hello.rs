//! Render the classic greeting through a sealed context.
//!
//! ```bash
//! RUST_LOG=showfmt_registry=debug cargo run --example hello
//! ```

use std::io;

use showfmt::{Context, ContextError, args};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ContextError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut ctx = Context::with_default_modules()?;
    ctx.seal()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    ctx.render(&mut out, "Hello, {cstr}! {float}\n", &args![c"world", 420.69])?;
    Ok(())
}
