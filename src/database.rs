use anyhow::{anyhow, Error};
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConn = PooledConnection<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub fn new_pool(database_url: &str) -> Result<DbPool, Error> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder().build(manager)?;

    Ok(pool)
}

pub fn run_migrations(db_pool: &DbPool) -> Result<(), Error> {
    let mut conn = db_pool.get()?;

    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow!("Error running database migrations: {e}"))?;

    Ok(())
}
