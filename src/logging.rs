use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str = "mandelbrot_zoom=info";

/// Installs the fmt subscriber on stderr. `RUST_LOG` overrides the default
/// `mandelbrot_zoom=info` filter.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
