//! The document store: JSON collections over a single SQLite connection.

use crate::error::StorageResult;
use rusqlite::functions::FunctionFlags;
use rusqlite::types::{Value as SqlValue, ValueRef};
use rusqlite::{Connection, OptionalExtension, params, params_from_iter};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// The three catalog collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Categories,
    Products,
    Users,
}

impl Collection {
    pub(crate) const fn table(self) -> &'static str {
        match self {
            Collection::Categories => "categories",
            Collection::Products => "products",
            Collection::Users => "users",
        }
    }
}

/// A field-equality predicate on a top-level document field.
///
/// Field names are supplied by the catalog layer, never by clients.
#[derive(Debug, Clone, Copy)]
pub enum Filter<'a> {
    /// Case-insensitive string equality.
    Eq(&'a str, &'a str),
    /// Boolean equality.
    EqBool(&'a str, bool),
    /// The field is JSON null or absent.
    IsNull(&'a str),
}

/// JSON document collections with field-equality queries and per-collection
/// order counters. All access goes through one mutex-guarded connection.
pub struct DocumentStore {
    conn: Mutex<Connection>,
}

impl DocumentStore {
    /// Open (creating if necessary) a file-backed store.
    pub fn open(path: &Path) -> StorageResult<Self> {
        debug!("opening document store at {}", path.display());
        Self::init(Connection::open(path)?)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> StorageResult<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> StorageResult<Self> {
        register_fold(&conn)?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS categories (id TEXT PRIMARY KEY, doc TEXT NOT NULL);
             CREATE TABLE IF NOT EXISTS products   (id TEXT PRIMARY KEY, doc TEXT NOT NULL);
             CREATE TABLE IF NOT EXISTS users      (id TEXT PRIMARY KEY, doc TEXT NOT NULL);
             CREATE TABLE IF NOT EXISTS counters   (name TEXT PRIMARY KEY, value INTEGER NOT NULL);",
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().expect("store mutex poisoned")
    }

    /// Insert a new document under `id`. Fails if the id already exists.
    pub fn insert(
        &self,
        collection: Collection,
        id: &str,
        doc: &serde_json::Value,
    ) -> StorageResult<()> {
        let conn = self.lock();
        conn.execute(
            &format!("INSERT INTO {} (id, doc) VALUES (?1, ?2)", collection.table()),
            params![id, doc.to_string()],
        )?;
        Ok(())
    }

    /// Overwrite the document under `id`. Returns false if no such record.
    pub fn replace(
        &self,
        collection: Collection,
        id: &str,
        doc: &serde_json::Value,
    ) -> StorageResult<bool> {
        let conn = self.lock();
        let n = conn.execute(
            &format!("UPDATE {} SET doc = ?2 WHERE id = ?1", collection.table()),
            params![id, doc.to_string()],
        )?;
        Ok(n > 0)
    }

    /// Delete the document under `id`. Returns false if no such record.
    pub fn remove(&self, collection: Collection, id: &str) -> StorageResult<bool> {
        let conn = self.lock();
        let n = conn.execute(
            &format!("DELETE FROM {} WHERE id = ?1", collection.table()),
            params![id],
        )?;
        Ok(n > 0)
    }

    /// Fetch a document by id.
    pub fn get(&self, collection: Collection, id: &str) -> StorageResult<Option<serde_json::Value>> {
        let conn = self.lock();
        let doc: Option<String> = conn
            .query_row(
                &format!("SELECT doc FROM {} WHERE id = ?1", collection.table()),
                params![id],
                |row| row.get(0),
            )
            .optional()?;
        match doc {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// All documents in a collection, in insertion order.
    pub fn all(&self, collection: Collection) -> StorageResult<Vec<serde_json::Value>> {
        let conn = self.lock();
        let mut stmt =
            conn.prepare(&format!("SELECT doc FROM {} ORDER BY rowid", collection.table()))?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut docs = Vec::new();
        for raw in rows {
            docs.push(serde_json::from_str(&raw?)?);
        }
        Ok(docs)
    }

    /// First document matching all filters, if any.
    pub fn find_one(
        &self,
        collection: Collection,
        filters: &[Filter<'_>],
    ) -> StorageResult<Option<serde_json::Value>> {
        let (clause, args) = build_where(filters);
        let conn = self.lock();
        let doc: Option<String> = conn
            .query_row(
                &format!(
                    "SELECT doc FROM {}{clause} ORDER BY rowid LIMIT 1",
                    collection.table()
                ),
                params_from_iter(args),
                |row| row.get(0),
            )
            .optional()?;
        match doc {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// All documents matching all filters, in insertion order.
    pub fn find_all(
        &self,
        collection: Collection,
        filters: &[Filter<'_>],
    ) -> StorageResult<Vec<serde_json::Value>> {
        let (clause, args) = build_where(filters);
        let conn = self.lock();
        let mut stmt = conn.prepare(&format!(
            "SELECT doc FROM {}{clause} ORDER BY rowid",
            collection.table()
        ))?;
        let rows = stmt.query_map(params_from_iter(args), |row| row.get::<_, String>(0))?;
        let mut docs = Vec::new();
        for raw in rows {
            docs.push(serde_json::from_str(&raw?)?);
        }
        Ok(docs)
    }

    /// Whether any document matches all filters.
    pub fn exists(&self, collection: Collection, filters: &[Filter<'_>]) -> StorageResult<bool> {
        let (clause, args) = build_where(filters);
        let conn = self.lock();
        let found: bool = conn.query_row(
            &format!(
                "SELECT EXISTS(SELECT 1 FROM {}{clause})",
                collection.table()
            ),
            params_from_iter(args),
            |row| row.get(0),
        )?;
        Ok(found)
    }

    /// Next value of the collection's order counter (1, 2, 3, ...).
    ///
    /// A single upsert, never read-max-then-add, so two concurrent creates
    /// cannot receive the same value.
    pub fn next_order(&self, collection: Collection) -> StorageResult<i64> {
        let conn = self.lock();
        let value: i64 = conn.query_row(
            "INSERT INTO counters (name, value) VALUES (?1, 1)
             ON CONFLICT(name) DO UPDATE SET value = value + 1
             RETURNING value",
            params![collection.table()],
            |row| row.get(0),
        )?;
        Ok(value)
    }
}

/// Translate filters into a WHERE clause plus positional parameters.
///
/// Field names are embedded directly; they come from the catalog layer and
/// are never client input.
fn build_where(filters: &[Filter<'_>]) -> (String, Vec<SqlValue>) {
    let mut clauses = Vec::with_capacity(filters.len());
    let mut args: Vec<SqlValue> = Vec::new();
    for filter in filters {
        match *filter {
            Filter::Eq(field, value) => {
                args.push(SqlValue::Text(value.to_owned()));
                clauses.push(format!(
                    "fold(json_extract(doc, '$.{field}')) = fold(?{})",
                    args.len()
                ));
            }
            Filter::EqBool(field, value) => {
                args.push(SqlValue::Integer(i64::from(value)));
                clauses.push(format!("json_extract(doc, '$.{field}') = ?{}", args.len()));
            }
            Filter::IsNull(field) => {
                clauses.push(format!("json_extract(doc, '$.{field}') IS NULL"));
            }
        }
    }
    if clauses.is_empty() {
        (String::new(), args)
    } else {
        (format!(" WHERE {}", clauses.join(" AND ")), args)
    }
}

/// Register the Unicode-lowercase `fold()` scalar used for case-insensitive
/// equality. SQLite's built-in LOWER only folds ASCII.
fn register_fold(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "fold",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            Ok(match ctx.get_raw(0) {
                ValueRef::Text(text) => Some(String::from_utf8_lossy(text).to_lowercase()),
                _ => None,
            })
        },
    )
}
