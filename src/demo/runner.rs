use std::io::Write;

use sqlx::postgres::PgConnection;
use tracing::{error, info};

use crate::database::executor;
use crate::demo::queries::{DemoQuery, INJECTION_DEMOS, QUERIES};
use crate::render::table;
use crate::Error;

const BANNER_WIDTH: usize = 130;

/// Runs the whole catalog strictly sequentially. A failing statement is
/// logged and skipped; only the output sink can abort the run.
pub async fn run(conn: &mut PgConnection, out: &mut impl Write) -> Result<(), Error> {
    let rule = "=".repeat(BANNER_WIDTH);

    writeln!(out, "\n{rule}")?;
    writeln!(out, "                     COSMETICS SHOP DATABASE - PostgreSQL")?;
    writeln!(out, "                10 SQL Queries + 3 SQL Injection Examples")?;
    writeln!(out, "{rule}")?;

    let mut failed = 0usize;

    for query in QUERIES {
        if !run_single(conn, out, query).await? {
            failed += 1;
        }
    }

    writeln!(out, "\n{rule}")?;
    writeln!(out, "SQL INJECTION DEMONSTRATIONS (for educational purposes)")?;
    writeln!(out, "{rule}")?;

    for demo in INJECTION_DEMOS {
        if !run_single(conn, out, demo).await? {
            failed += 1;
        }
    }

    let total = QUERIES.len() + INJECTION_DEMOS.len();
    writeln!(out, "\n{rule}")?;
    if failed == 0 {
        writeln!(out, "SUCCESS: All queries executed successfully!")?;
    } else {
        writeln!(
            out,
            "DONE: {} of {} statements executed, {} failed",
            total - failed,
            total,
            failed
        )?;
    }
    writeln!(out, "{rule}")?;
    writeln!(out)?;

    info!(total, failed, "Demo run finished");

    Ok(())
}

async fn run_single(
    conn: &mut PgConnection,
    out: &mut impl Write,
    query: &DemoQuery,
) -> Result<bool, Error> {
    info!(description = query.description, "Running statement");

    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(out, "\n{rule}")?;
    writeln!(out, "{}", query.description)?;
    writeln!(out, "{rule}")?;

    match executor::run_query(conn, query.sql).await {
        Ok(result) => {
            table::render(out, &result)?;
            Ok(true)
        }
        Err(e) => {
            error!(
                error = %e,
                description = query.description,
                "Statement failed, continuing with the next one"
            );
            Ok(false)
        }
    }
}
