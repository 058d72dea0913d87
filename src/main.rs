mod config;
mod database;
mod demo;
mod logging;
mod render;
mod util;

use std::io::Write;

use tracing::{error, info, warn};

use crate::database::database_access;

pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    if std::env::var("RUST_BACKTRACE").is_err() {
        std::env::set_var("RUST_BACKTRACE", "1");
    }

    let cfg = config::load_config()?;

    logging::init(&cfg)?;
    info!("Logging Initialised. Initialising Cosmetiq demo run");

    let mut conn = match database_access::connect(&cfg.database).await {
        Ok(conn) => conn,
        Err(e) => {
            error!(error = %e, "Could not connect to PostgreSQL");
            return Err(e);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(&mut out, "OK: PostgreSQL connected\n")?;

    let run_result = demo::runner::run(&mut conn, &mut out).await;

    // Closed on every exit path, including a failed run.
    if let Err(e) = database_access::close(conn).await {
        warn!(error = %e, "Could not cleanly close database connection");
    }

    run_result
}
