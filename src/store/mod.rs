//! Request-scoped database sessions and the generic data manager.
//!
//! Every inbound request owns exactly one [`Session`] (a transaction taken
//! from the pool). Handlers pass it down to the domain services, which drive
//! one or more [`DataManager`] instances against it, and commit at the
//! boundary on success. A dropped, uncommitted session rolls back.
//!
//! [`DataManager`] is implemented once and instantiated per entity: the
//! [`Model`] trait carries everything entity-specific (table name, ordered
//! column list, bind hook, searchable column, transport conversion).

use std::marker::PhantomData;

use sqlx::sqlite::{SqliteArguments, SqliteConnection, SqliteRow};
use sqlx::{FromRow, Sqlite, SqlitePool, Transaction};

use crate::error::{AppError, AppResult};

/// One transactional unit of work, scoped to a single request.
///
/// Obtained via [`Session::begin`]; committed explicitly on the success path.
/// Dropping an uncommitted session discards all pending writes.
pub struct Session {
    tx: Transaction<'static, Sqlite>,
}

impl Session {
    /// Opens a transaction on a pooled connection.
    ///
    /// Failure to acquire a connection is surfaced as-is - there is no retry.
    pub async fn begin(pool: &SqlitePool) -> AppResult<Self> {
        let tx = pool.begin().await?;
        Ok(Self { tx })
    }

    /// The live connection, for executing queries within this unit of work.
    pub fn conn(&mut self) -> &mut SqliteConnection {
        &mut self.tx
    }

    /// Durably commits all pending writes and releases the connection.
    pub async fn commit(self) -> AppResult<()> {
        self.tx.commit().await?;
        Ok(())
    }

    /// Explicitly discards pending writes. Dropping the session has the same
    /// effect; this exists for call sites that want to be loud about it.
    pub async fn rollback(self) -> AppResult<()> {
        self.tx.rollback().await?;
        Ok(())
    }
}

/// Binds a persistence model to its table layout and transport schema.
///
/// `COLUMNS` lists every non-id column in the order [`Model::bind_columns`]
/// binds them; `id` is always generated by the database and never written.
pub trait Model: Sized + for<'r> FromRow<'r, SqliteRow> + Send + Unpin {
    /// The transport representation returned over the API boundary.
    type Schema: From<Self> + Send;

    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];

    /// Column used for substring search: the entity's title-like attribute if
    /// it has one, otherwise its name-like attribute. `None` means the entity
    /// is not searchable.
    const SEARCH_COLUMN: Option<&'static str>;

    /// Binds the values of every column in `COLUMNS`, in order.
    fn bind_columns<'q>(
        &self,
        query: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>;
}

/// Uniform CRUD over any [`Model`]. Stateless; all operations borrow the
/// request's [`Session`].
pub struct DataManager<M: Model> {
    _model: PhantomData<M>,
}

impl<M: Model> Default for DataManager<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Model> DataManager<M> {
    pub fn new() -> Self {
        Self { _model: PhantomData }
    }

    /// Fetches one record by identifier. Absence is `None`, never an error;
    /// translation to 404 happens at the route boundary.
    pub async fn get_item(&self, session: &mut Session, id: i64) -> AppResult<Option<M::Schema>> {
        let sql = format!("SELECT * FROM {} WHERE id = ?", M::TABLE);
        let model = sqlx::query_as::<_, M>(&sql).bind(id).fetch_optional(session.conn()).await?;
        Ok(model.map(M::Schema::from))
    }

    /// Fetches all records of the type, in default (insertion) order.
    pub async fn get_items(&self, session: &mut Session) -> AppResult<Vec<M::Schema>> {
        let sql = format!("SELECT * FROM {}", M::TABLE);
        let models = sqlx::query_as::<_, M>(&sql).fetch_all(session.conn()).await?;
        Ok(models.into_iter().map(M::Schema::from).collect())
    }

    /// Fetches records whose `column` equals `key` - the foreign-key filter
    /// used by the hierarchical listings.
    pub async fn get_items_by(
        &self,
        session: &mut Session,
        column: &'static str,
        key: i64,
    ) -> AppResult<Vec<M::Schema>> {
        let sql = format!("SELECT * FROM {} WHERE {} = ?", M::TABLE, column);
        let models = sqlx::query_as::<_, M>(&sql).bind(key).fetch_all(session.conn()).await?;
        Ok(models.into_iter().map(M::Schema::from).collect())
    }

    /// One page of records plus the total row count, for paginated listings.
    pub async fn get_items_paginated(
        &self,
        session: &mut Session,
        page: i64,
        page_size: i64,
    ) -> AppResult<(Vec<M::Schema>, i64)> {
        let count_sql = format!("SELECT COUNT(*) FROM {}", M::TABLE);
        let total: i64 = sqlx::query_scalar(&count_sql).fetch_one(session.conn()).await?;

        let sql = format!("SELECT * FROM {} LIMIT ? OFFSET ?", M::TABLE);
        let models = sqlx::query_as::<_, M>(&sql)
            .bind(page_size)
            .bind((page - 1) * page_size)
            .fetch_all(session.conn())
            .await?;
        Ok((models.into_iter().map(M::Schema::from).collect(), total))
    }

    /// Case-insensitive substring match against the model's search column.
    ///
    /// Query-length validation is a boundary concern and does not happen here.
    pub async fn search_items(&self, session: &mut Session, q: &str) -> AppResult<Vec<M::Schema>> {
        let column = M::SEARCH_COLUMN.ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!(
                "model '{}' has neither a 'title' nor a 'name' attribute",
                M::TABLE
            ))
        })?;
        let sql = format!("SELECT * FROM {} WHERE LOWER({}) LIKE LOWER(?)", M::TABLE, column);
        let pattern = format!("%{}%", q);
        let models =
            sqlx::query_as::<_, M>(&sql).bind(pattern).fetch_all(session.conn()).await?;
        Ok(models.into_iter().map(M::Schema::from).collect())
    }

    /// Inserts a record and returns the persisted representation, with the
    /// generated identifier and any column defaults populated.
    pub async fn add_item(&self, session: &mut Session, item: &M) -> AppResult<M::Schema> {
        let placeholders = vec!["?"; M::COLUMNS.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            M::TABLE,
            M::COLUMNS.join(", "),
            placeholders
        );
        let result = item.bind_columns(sqlx::query(&sql)).execute(session.conn()).await?;
        let id = result.last_insert_rowid();

        self.get_item(session, id).await?.ok_or_else(|| {
            AppError::Database(format!("inserted row {} vanished from {}", id, M::TABLE))
        })
    }

    /// Overwrites every non-id column of the record with the replacement's
    /// values. An absent identifier yields `Ok(None)` silently - callers must
    /// treat that as "not found" themselves.
    pub async fn update_item(
        &self,
        session: &mut Session,
        id: i64,
        item: &M,
    ) -> AppResult<Option<M::Schema>> {
        let assignments = M::COLUMNS
            .iter()
            .map(|c| format!("{} = ?", c))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("UPDATE {} SET {} WHERE id = ?", M::TABLE, assignments);
        let result = item
            .bind_columns(sqlx::query(&sql))
            .bind(id)
            .execute(session.conn())
            .await?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_item(session, id).await
    }

    /// Deletes one record by identifier. Best-effort contract: storage errors
    /// are logged and collapsed to `false` instead of propagating.
    pub async fn delete_item(&self, session: &mut Session, id: i64) -> AppResult<bool> {
        let sql = format!("DELETE FROM {} WHERE id = ?", M::TABLE);
        let deleted = self.execute_delete(session, sqlx::query(&sql).bind(id)).await;
        Ok(deleted)
    }

    /// Deletes every record of the type. Same best-effort contract as
    /// [`DataManager::delete_item`].
    pub async fn delete_items(&self, session: &mut Session) -> AppResult<bool> {
        let sql = format!("DELETE FROM {}", M::TABLE);
        let deleted = self.execute_delete(session, sqlx::query(&sql)).await;
        Ok(deleted)
    }

    /// The fallible delete path, kept as an explicit `Result` internally and
    /// collapsed to a boolean at the manager surface.
    async fn execute_delete<'q>(
        &self,
        session: &mut Session,
        query: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> bool {
        match query.execute(session.conn()).await {
            Ok(result) => result.rows_affected() > 0,
            Err(e) => {
                tracing::warn!("best-effort delete from {} failed: {}", M::TABLE, e);
                false
            }
        }
    }
}
