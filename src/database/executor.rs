use sqlx::postgres::{PgConnection, PgRow};
use sqlx::types::chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use sqlx::types::BigDecimal;
use sqlx::{Column, Row, TypeInfo};
use tracing::debug;

use crate::{fmt, str, Error};

/// Tabular output of a query: ordered column names plus ordered rows of
/// string-rendered cell values.
#[derive(Debug, Clone)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Executes a raw query string and renders every cell to text.
///
/// The string is sent to the server verbatim, with no parameter binding; the
/// injection demos rely on that.
pub async fn run_query(conn: &mut PgConnection, sql: &str) -> Result<ResultSet, Error> {
    debug!(sql, "Executing query");

    let rows = sqlx::query(sql).fetch_all(&mut *conn).await?;

    // An empty result carries no row metadata, but the renderer only needs
    // column names when there are rows to align under them.
    let columns: Vec<String> = match rows.first() {
        Some(row) => row.columns().iter().map(|c| str!(c.name())).collect(),
        None => Vec::new(),
    };

    let mut rendered = Vec::with_capacity(rows.len());
    for row in &rows {
        let mut cells = Vec::with_capacity(columns.len());
        for idx in 0..row.columns().len() {
            cells.push(render_cell(row, idx)?);
        }
        rendered.push(cells);
    }

    debug!(rows = rendered.len(), "Query returned");

    Ok(ResultSet {
        columns,
        rows: rendered,
    })
}

/// Renders one cell by its PostgreSQL type name. SQL NULL renders as the
/// empty string.
fn render_cell(row: &PgRow, idx: usize) -> Result<String, Error> {
    let type_name = row.column(idx).type_info().name();

    match type_name {
        "BOOL" => Ok(display_or_empty(row.try_get::<Option<bool>, _>(idx)?)),
        "INT2" => Ok(display_or_empty(row.try_get::<Option<i16>, _>(idx)?)),
        "INT4" => Ok(display_or_empty(row.try_get::<Option<i32>, _>(idx)?)),
        "INT8" => Ok(display_or_empty(row.try_get::<Option<i64>, _>(idx)?)),
        "FLOAT4" => Ok(display_or_empty(row.try_get::<Option<f32>, _>(idx)?)),
        "FLOAT8" => Ok(display_or_empty(row.try_get::<Option<f64>, _>(idx)?)),
        "NUMERIC" => Ok(display_or_empty(
            row.try_get::<Option<BigDecimal>, _>(idx)?,
        )),
        "DATE" => Ok(display_or_empty(row.try_get::<Option<NaiveDate>, _>(idx)?)),
        "TIMESTAMP" => Ok(display_or_empty(
            row.try_get::<Option<NaiveDateTime>, _>(idx)?,
        )),
        "TIMESTAMPTZ" => Ok(row
            .try_get::<Option<DateTime<Utc>>, _>(idx)?
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_default()),
        _ => {
            // Text types and anything unrecognised: attempt the generic
            // decodes the driver supports before giving up.
            if let Ok(v) = row.try_get::<Option<String>, _>(idx) {
                return Ok(v.unwrap_or_default());
            }
            if let Ok(v) = row.try_get::<Option<i64>, _>(idx) {
                return Ok(display_or_empty(v));
            }
            if let Ok(v) = row.try_get::<Option<f64>, _>(idx) {
                return Ok(display_or_empty(v));
            }
            if let Ok(v) = row.try_get::<Option<bool>, _>(idx) {
                return Ok(display_or_empty(v));
            }
            Err(Box::new(std::io::Error::other(fmt!(
                "Unsupported column type {type_name} at index {idx}"
            ))) as Error)
        }
    }
}

fn display_or_empty<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| str!(v)).unwrap_or_default()
}
