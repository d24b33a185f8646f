use crate::{config::Config, utils::PhotoStore};
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr};
use std::sync::Arc;
use tracing::log::LevelFilter;

pub trait StateTrait: Send + Sync + Clone + 'static {
    type Db: ConnectionTrait + Clone;

    fn db(&self) -> &Self::Db;
    fn photos(&self) -> &PhotoStore;
    fn max_upload_size(&self) -> usize;
}

pub struct State {
    database: DbConn,
    photos: PhotoStore,
    max_upload_size: usize,
}

impl State {
    /// Connects to the database, brings the schema up to date and seeds an empty catalogue.
    pub async fn new(config: &Config) -> Result<Arc<Self>, DbErr> {
        let database = Self::connect_database(&config.database_url).await?;

        migration::Migrator::up(&database, None).await?;
        crate::utils::seed_plants(&database).await?;

        Ok(Self::with_database(database, config))
    }

    /// Wraps an already migrated connection.
    pub fn with_database(database: DbConn, config: &Config) -> Arc<Self> {
        Arc::new(Self {
            database,
            photos: PhotoStore::new(&config.public_dir),
            max_upload_size: config.max_upload_size,
        })
    }

    async fn connect_database(url: &str) -> Result<DbConn, DbErr> {
        info!("Trying to connect to database");

        let mut opts = ConnectOptions::new(url);
        opts.sqlx_logging_level(LevelFilter::Debug);

        let db = Database::connect(opts)
            .await
            .inspect_err(|err| error!("failed to connect to database: {err}"))?;

        info!("Connected to database");

        Ok(db)
    }
}

impl StateTrait for Arc<State> {
    type Db = DbConn;

    fn db(&self) -> &Self::Db {
        &self.database
    }

    fn photos(&self) -> &PhotoStore {
        &self.photos
    }

    fn max_upload_size(&self) -> usize {
        self.max_upload_size
    }
}
