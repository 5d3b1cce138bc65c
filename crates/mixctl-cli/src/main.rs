//! mixctl - minimal OSS mixer control
//!
//! Opens the mixer device once, walks the command-line tokens, and exits.
//! All values go to stdout; the only fatal error is a device that cannot
//! be opened.

use anyhow::Result;
use mixctl_cli::app;
use mixctl_hal::OssMixer;

fn main() -> Result<()> {
    setup_logging();

    let mut mixer = match OssMixer::from_env() {
        Ok(mixer) => mixer,
        Err(e) => {
            eprintln!("mixctl: {e}");
            std::process::exit(1);
        }
    };
    tracing::debug!("using mixer device {}", mixer.path().display());

    let tokens: Vec<String> = std::env::args().skip(1).collect();
    let stdout = std::io::stdout();
    app::run(&mut mixer, &tokens, &mut stdout.lock())?;
    Ok(())
}

/// Setup logging to stderr, keeping stdout free for mixer values.
fn setup_logging() {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
