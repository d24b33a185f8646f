use super::request::RequestBuilder;
use entity::plants;
use http::StatusCode;
use migration::MigratorTrait;
use plant_guide::{Config, State};
use reqwest::{multipart::Form, redirect::Policy, Client};
use sea_orm::{Database, DbConn, EntityTrait, QueryOrder};
use std::{net::SocketAddr, path::PathBuf};
use tempfile::TempDir;
use tokio::net::TcpListener;

pub struct Env {
    pub addr: SocketAddr,
    pub client: Client,
    pub db: DbConn,
    pub config: Config,
    _dir: TempDir,
}

#[allow(unused)]
pub fn test_config(dir: &TempDir) -> Config {
    Config {
        database_url: format!(
            "sqlite://{}?mode=rwc",
            dir.path().join("plants.db").display()
        ),
        public_dir: dir.path().join("wwwroot"),
        ..Default::default()
    }
}

async fn setup_database(config: &Config) -> DbConn {
    let db = Database::connect(config.database_url.clone())
        .await
        .expect("failed to connect to database");

    migration::Migrator::fresh(&db)
        .await
        .expect("failed to apply migrations");

    db
}

async fn setup_backend(config: &Config, db: DbConn) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let state = State::with_database(db, config);

    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        plant_guide::run(listener, state).await.unwrap();
    });

    addr
}

/// Starts the server on an ephemeral port with an empty catalogue in a temporary directory.
pub async fn setup() -> Env {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let config = test_config(&dir);

    let db = setup_database(&config).await;
    let addr = setup_backend(&config, db.clone()).await;

    let client = Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("failed to build http client");

    Env {
        addr,
        client,
        db,
        config,
        _dir: dir,
    }
}

#[allow(unused)]
impl Env {
    fn get_url(&self, url: &str) -> String {
        format!("http://{}{}", self.addr, url)
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.get(self.get_url(url)))
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.post(self.get_url(url)))
    }

    pub fn public_dir(&self) -> PathBuf {
        self.config.public_dir.clone()
    }

    /// Submits the create form and returns the stored plant.
    pub async fn create_plant(&self, form: Form) -> plants::Model {
        let res = self.post("/Plants/Create").multipart(form).send().await;

        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.location().as_deref(), Some("/Plants"));

        plants::Entity::find()
            .order_by_desc(plants::Column::Id)
            .one(&self.db)
            .await
            .unwrap()
            .expect("plant was not stored")
    }

    pub async fn find_plant(&self, id: i32) -> Option<plants::Model> {
        plants::Entity::find_by_id(id).one(&self.db).await.unwrap()
    }

    pub async fn all_plants(&self) -> Vec<plants::Model> {
        plants::Entity::find()
            .order_by_asc(plants::Column::Id)
            .all(&self.db)
            .await
            .unwrap()
    }
}
