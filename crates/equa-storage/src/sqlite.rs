//! SQLite storage backend.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use equa_core::{Coefficients, Equation, EquationId};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::{Executor, Row, Sqlite};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::config::DatabaseConfig;
use crate::traits::{EquationStats, EquationStore};
use crate::Result;

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS equations (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    a             REAL NOT NULL,
    b             REAL NOT NULL,
    c             REAL NOT NULL,
    solution      TEXT,
    discriminant  REAL,
    solution_type TEXT,
    created_at    TEXT NOT NULL,
    updated_at    TEXT NOT NULL
)
"#;

const SELECT_COLUMNS: &str = "SELECT id, a, b, c, created_at, updated_at FROM equations";

/// Equation store backed by a SQLite database through a `sqlx` pool.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Opens (creating if needed) the database named by `config.url`.
    ///
    /// In-memory databases are pinned to a single connection that is never
    /// recycled, since each SQLite connection would otherwise see its own
    /// empty database.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

        let pool = if config.is_in_memory() {
            tracing::debug!("opening in-memory SQLite database on a single connection");
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(config.max_connections.max(1))
                .connect_with(options)
                .await?
        };

        tracing::info!(url = %config.redacted_url(), "connected to SQLite");
        Ok(Self { pool })
    }

    /// The underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn fetch_one_by_id<'e, E>(executor: E, id: EquationId) -> Result<Option<Equation>>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let sql = format!("{SELECT_COLUMNS} WHERE id = ?");
        let row = sqlx::query(&sql)
            .bind(id.get())
            .fetch_optional(executor)
            .await?;
        row.as_ref().map(row_to_equation).transpose()
    }
}

fn row_to_equation(row: &SqliteRow) -> Result<Equation> {
    let id: i64 = row.try_get("id")?;
    let coefficients = Coefficients::new(row.try_get("a")?, row.try_get("b")?, row.try_get("c")?);
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at")?;
    Ok(Equation::restore(
        EquationId::new(id),
        coefficients,
        created_at,
        updated_at,
    ))
}

#[async_trait]
impl EquationStore for SqliteStore {
    fn backend(&self) -> &'static str {
        "sqlite"
    }

    async fn init_schema(&self) -> Result<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        tracing::debug!("equations table ready");
        Ok(())
    }

    async fn ping(&self) -> Result<i64> {
        let row = sqlx::query("SELECT 1 AS test").fetch_one(&self.pool).await?;
        Ok(row.try_get("test")?)
    }

    async fn insert(&self, mut equation: Equation) -> Result<Equation> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO equations \
             (a, b, c, solution, discriminant, solution_type, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(equation.a())
        .bind(equation.b())
        .bind(equation.c())
        .bind(equation.solution_text())
        .bind(equation.discriminant())
        .bind(equation.solution_type().as_str())
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let id = EquationId::new(result.last_insert_rowid());
        equation.mark_saved(id, now);
        tracing::debug!(%id, "inserted equation");
        Ok(equation)
    }

    async fn get(&self, id: EquationId) -> Result<Option<Equation>> {
        Self::fetch_one_by_id(&self.pool, id).await
    }

    async fn list(&self) -> Result<Vec<Equation>> {
        let sql = format!("{SELECT_COLUMNS} ORDER BY id DESC");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter().map(row_to_equation).collect()
    }

    async fn update(&self, id: EquationId, equation: &Equation) -> Result<Option<Equation>> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "UPDATE equations SET \
             a = ?, b = ?, c = ?, solution = ?, discriminant = ?, solution_type = ?, updated_at = ? \
             WHERE id = ?",
        )
        .bind(equation.a())
        .bind(equation.b())
        .bind(equation.c())
        .bind(equation.solution_text())
        .bind(equation.discriminant())
        .bind(equation.solution_type().as_str())
        .bind(Utc::now())
        .bind(id.get())
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        let updated = Self::fetch_one_by_id(&mut *tx, id).await?;
        tx.commit().await?;
        Ok(updated)
    }

    async fn delete(&self, id: EquationId) -> Result<Option<Equation>> {
        let mut tx = self.pool.begin().await?;

        let Some(existing) = Self::fetch_one_by_id(&mut *tx, id).await? else {
            tx.rollback().await?;
            return Ok(None);
        };

        sqlx::query("DELETE FROM equations WHERE id = ?")
            .bind(id.get())
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::debug!(%id, "deleted equation");
        Ok(Some(existing))
    }

    async fn stats(&self) -> Result<EquationStats> {
        let total: i64 = sqlx::query("SELECT COUNT(*) AS total FROM equations")
            .fetch_one(&self.pool)
            .await?
            .try_get("total")?;

        let rows = sqlx::query(
            "SELECT solution_type, COUNT(*) AS n FROM equations \
             WHERE solution_type IS NOT NULL GROUP BY solution_type",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut by_solution_type = BTreeMap::new();
        for row in &rows {
            let solution_type: String = row.try_get("solution_type")?;
            let n: i64 = row.try_get("n")?;
            by_solution_type.insert(solution_type, n.max(0) as u64);
        }

        let sql = format!("{SELECT_COLUMNS} ORDER BY id DESC LIMIT 1");
        let latest = sqlx::query(&sql).fetch_optional(&self.pool).await?;
        let latest_equation = latest
            .as_ref()
            .map(row_to_equation)
            .transpose()?
            .map(|e| e.to_record());

        Ok(EquationStats {
            total_equations: total.max(0) as u64,
            by_solution_type,
            latest_equation,
        })
    }
}
