use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::{fmt, Error};

/// Opens the single connection for a demo run. The handle is passed by
/// mutable reference to whatever issues queries and must be released with
/// [`close`] when the run ends.
pub async fn connect(config: &DatabaseConfig) -> Result<PgConnection, Error> {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.dbname)
        .username(&config.user)
        .password(&config.password);

    info!(
        host = %config.host,
        port = config.port,
        dbname = %config.dbname,
        "Opening database connection"
    );

    PgConnection::connect_with(&options).await.map_err(|e| {
        Box::new(std::io::Error::other(fmt!(
            "Could not connect to database: {e}"
        ))) as Error
    })
}

pub async fn close(conn: PgConnection) -> Result<(), Error> {
    info!("Closing database connection");
    conn.close().await?;
    Ok(())
}
