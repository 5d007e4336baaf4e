//! Log output setup for the binary.
//!
//! Progress lines go to standard output; warnings and errors go to standard
//! error.

use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber.
///
/// `RUST_LOG` wins over `default_level`.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(split_writer(std::io::stderr, std::io::stdout))
        .init();
}

/// Route `WARN` and `ERROR` events to `errors`, everything else to `output`.
pub fn split_writer<E, O>(
    errors: E,
    output: O,
) -> impl for<'a> MakeWriter<'a> + Send + Sync + 'static
where
    E: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    O: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    errors.with_max_level(Level::WARN).or_else(output)
}
