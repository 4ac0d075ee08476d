#[macro_use]
extern crate diesel;

use std::{
    cell::{RefCell, RefMut},
    sync::Arc,
    time::Duration,
};

use anyhow::{anyhow, Result as Fallible};
use diesel::{
    connection::SimpleConnection as _, r2d2, result::Error as DieselError,
    sqlite::SqliteConnection, Connection as _,
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use news_core::repositories as repo;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

mod models;
mod repo_impl;
mod schema;


const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);
const CONNECTION_TIMEOUT: Duration = Duration::from_secs(10);

type ConnectionManager = r2d2::ConnectionManager<SqliteConnection>;
type ConnectionPool = r2d2::Pool<ConnectionManager>;
type PooledConnection = r2d2::PooledConnection<ConnectionManager>;

/// Per-connection settings, applied whenever the pool opens
/// a new connection.
///
/// SQLite only enforces foreign keys if enabled on each
/// connection. Comments and tags depend on them to stay
/// attached to an existing post.
#[derive(Debug)]
struct ConnectionSettings {
    busy_timeout: Duration,
}

impl r2d2::CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionSettings {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
            self.busy_timeout.as_millis()
        ))
        .map_err(r2d2::Error::QueryError)
    }
}

/// Pool of SQLite connections.
///
/// Any number of readers share the pool while a writer
/// locks it exclusively, since SQLite supports only a single
/// writer at a time.
#[derive(Clone)]
pub struct Connections {
    pool: Arc<RwLock<ConnectionPool>>,
}

impl Connections {
    pub fn init(url: &str, pool_size: u32) -> Fallible<Self> {
        let pool = ConnectionPool::builder()
            .max_size(pool_size)
            .connection_timeout(CONNECTION_TIMEOUT)
            .connection_customizer(Box::new(ConnectionSettings {
                busy_timeout: BUSY_TIMEOUT,
            }))
            .build(ConnectionManager::new(url))
            .map_err(|err| anyhow!("Unable to open SQLite database '{url}': {err}"))?;
        // The journal mode is stored in the database file
        pool.get()?.batch_execute("PRAGMA journal_mode = WAL;")?;
        Ok(Self {
            pool: Arc::new(RwLock::new(pool)),
        })
    }

    pub fn shared(&self) -> Fallible<DbReadOnly<'_>> {
        let pool = self.pool.read();
        let conn = pool.get()?;
        Ok(DbReadOnly {
            _pool: pool,
            conn: RefCell::new(conn),
        })
    }

    pub fn exclusive(&self) -> Fallible<DbReadWrite<'_>> {
        let pool = self.pool.write();
        let conn = pool.get()?;
        Ok(DbReadWrite {
            _pool: pool,
            conn: RefCell::new(conn),
        })
    }
}

/// Read access, only implements the reading repositories.
pub struct DbReadOnly<'a> {
    _pool: RwLockReadGuard<'a, ConnectionPool>,
    conn: RefCell<PooledConnection>,
}

/// Exclusive read and write access.
pub struct DbReadWrite<'a> {
    _pool: RwLockWriteGuard<'a, ConnectionPool>,
    conn: RefCell<PooledConnection>,
}

/// The connection of a running transaction.
pub struct DbConnection<'a> {
    conn: RefCell<&'a mut SqliteConnection>,
}

enum TransactionError<E> {
    Aborted(E),
    Db(DieselError),
}

impl<E> From<DieselError> for TransactionError<E> {
    fn from(err: DieselError) -> Self {
        Self::Db(err)
    }
}

impl DbReadWrite<'_> {
    /// Run `f` in a transaction.
    ///
    /// If `f` fails all changes are rolled back and
    /// its error is returned unchanged.
    pub fn transaction<T, E, F>(&mut self, f: F) -> Result<T, E>
    where
        F: FnOnce(&DbConnection<'_>) -> Result<T, E>,
        E: From<repo::Error>,
    {
        let conn: &mut SqliteConnection = self.conn.get_mut();
        conn.transaction::<_, TransactionError<E>, _>(|conn| {
            f(&DbConnection {
                conn: RefCell::new(conn),
            })
            .map_err(TransactionError::Aborted)
        })
        .map_err(|err| match err {
            TransactionError::Aborted(err) => err,
            TransactionError::Db(err) => repo_impl::from_diesel_err(err).into(),
        })
    }
}

// Uniform access to the underlying connection for
// the repository implementations.
trait Conn {
    fn conn(&self) -> RefMut<'_, SqliteConnection>;
}

impl Conn for DbReadOnly<'_> {
    fn conn(&self) -> RefMut<'_, SqliteConnection> {
        RefMut::map(self.conn.borrow_mut(), |conn| &mut **conn)
    }
}

impl Conn for DbReadWrite<'_> {
    fn conn(&self) -> RefMut<'_, SqliteConnection> {
        RefMut::map(self.conn.borrow_mut(), |conn| &mut **conn)
    }
}

impl Conn for DbConnection<'_> {
    fn conn(&self) -> RefMut<'_, SqliteConnection> {
        RefMut::map(self.conn.borrow_mut(), |conn| &mut **conn)
    }
}

pub fn run_embedded_database_migrations(mut db: DbReadWrite<'_>) -> Fallible<()> {
    log::info!("Running embedded database migrations");
    let conn: &mut SqliteConnection = db.conn.get_mut();
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| anyhow!("Failed to run database migrations: {err}"))?;
    for version in applied {
        log::debug!("Applied database migration {version}");
    }
    Ok(())
}
