use anyhow::Result;
use tracing::info;

use ferz_cli::{Session, SessionConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = SessionConfig::from_env();
    info!(?config, "ferz starting");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(stdin.lock(), stdout.lock(), config).run()?;

    info!("ferz shutting down");
    Ok(())
}
