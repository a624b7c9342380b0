// sqlx::Error -> AppError mapping

use waitlist_core::error::AppError;

/// Convert sqlx::Error to AppError with structured information
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(code) = db_err.code() {
                let code_str = code.as_ref();

                // SQLite error codes: https://www.sqlite.org/rescode.html
                match code_str {
                    "275" => {
                        // CHECK constraint failed
                        AppError::Database(format!(
                            "Check constraint violation: {} ({})",
                            db_err.message(),
                            code_str
                        ))
                    }
                    "5" | "517" => {
                        // SQLITE_BUSY / SQLITE_BUSY_SNAPSHOT
                        AppError::Database(format!(
                            "Database locked (SQLITE_BUSY): {}",
                            db_err.message()
                        ))
                    }
                    "13" => AppError::Database(format!("Database full: {}", db_err.message())),
                    _ => AppError::Database(format!(
                        "Database error [{}]: {}",
                        code_str,
                        db_err.message()
                    )),
                }
            } else {
                AppError::Database(format!("Database error: {}", db_err.message()))
            }
        }
        sqlx::Error::RowNotFound => AppError::Database("Row not found".to_string()),
        sqlx::Error::ColumnNotFound(col) => {
            AppError::Database(format!("Column not found: {}", col))
        }
        sqlx::Error::PoolTimedOut => {
            AppError::Database("Timed out acquiring a pooled connection".to_string())
        }
        // Connection, pool, protocol errors
        _ => AppError::Database(err.to_string()),
    }
}
