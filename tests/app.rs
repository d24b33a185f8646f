mod utils;

use entity::plants;
use plant_guide::State;
use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder};
use utils::prelude::*;

#[tokio::test]
async fn liveness() {
    let env = setup().await;

    let res = env.get("/livez").send().await;

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn readiness() {
    let env = setup().await;

    let res = env.get("/readyz").send().await;

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_route() {
    let env = setup().await;

    let res = env.get("/Gardens").send().await;

    assert_error!(res, error::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_post() {
    let env = setup().await;

    let res = env.post("/Gardens/Create").send().await;

    assert_error!(res, error::NOT_FOUND);
}

#[tokio::test]
async fn serves_public_files() {
    let env = setup().await;

    let images = env.public_dir().join("images");
    std::fs::create_dir_all(&images).unwrap();
    std::fs::write(images.join("default.jpg"), b"placeholder").unwrap();

    let res = env.get(&format!("/{DEFAULT_PHOTO_PATH}")).send().await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.bytes().await, b"placeholder");
}

#[tokio::test]
async fn request_id_is_returned() {
    let env = setup().await;

    let res = env.get("/Plants").send().await;

    assert!(res.header("x-request-id").is_some());
}

#[tokio::test]
async fn startup_seeds_empty_catalogue_once() {
    let dir = tempfile::tempdir().unwrap();
    let config = utils::test_config(&dir);

    let state = State::new(&config).await.unwrap();
    let db = plant_guide::StateTrait::db(&state);

    let seeded = plants::Entity::find()
        .order_by_asc(plants::Column::Id)
        .all(db)
        .await
        .unwrap();

    assert_eq!(seeded.len(), 2);
    assert_eq!(seeded[0].scientific_name.as_deref(), Some("Ficus elastica"));
    assert_eq!(seeded[0].photo_path.as_deref(), Some("images/ficus.jpeg"));
    assert_eq!(
        seeded[1].scientific_name.as_deref(),
        Some("Sansevieria trifasciata")
    );

    drop(state);

    let state = State::new(&config).await.unwrap();
    let db = plant_guide::StateTrait::db(&state);

    assert_eq!(plants::Entity::find().count(db).await.unwrap(), 2);
}
