use serde_json::{json, Value};

use plantlog::models::plant::Plant;

use crate::common::fixtures::plant::{insert_plant, insert_plants};
use crate::common::test_app::spawn_app;
use crate::controllers::plant_params;

#[tokio::test]
async fn create_plant_appears_in_listing() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.post_create_plant(&plant_params("Monstera")).await;

    // Assert
    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"status_code": 200}));

    let plants = app.get_plants().await.json::<Vec<Plant>>().await.unwrap();
    assert_eq!(plants.len(), 1);

    let plant = &plants[0];
    assert!(plant.id > 0);
    assert_eq!(plant.name, "Monstera");
    assert_eq!(plant.days_between_water, 7);
    assert_eq!(plant.days_between_fertilizer, 30);
    assert_eq!(plant.days_between_repot, 365);
}

#[tokio::test]
async fn plant_names_match_plant_listing() {
    let app = spawn_app().await;
    insert_plants(app.db_pool.clone()).await;

    let plants = app.get_plants().await.json::<Vec<Plant>>().await.unwrap();
    let names = app
        .get_plant_names()
        .await
        .json::<Vec<String>>()
        .await
        .unwrap();

    assert_eq!(plants.len(), 3);
    assert_eq!(
        names,
        plants.iter().map(|p| p.name.clone()).collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn create_plant_missing_field_is_rejected() {
    let app = spawn_app().await;

    let mut params = plant_params("Monstera");
    params.as_object_mut().unwrap().remove("days_between_repot");

    let response = app.post_create_plant(&params).await;

    assert!(response.status().is_client_error());
    let plants = app.get_plants().await.json::<Vec<Plant>>().await.unwrap();
    assert!(plants.is_empty());
}

#[tokio::test]
async fn create_plant_tolerates_duplicate_names() {
    let app = spawn_app().await;

    let first = app.post_create_plant(&plant_params("Monstera")).await;
    let second = app.post_create_plant(&plant_params("Monstera")).await;

    assert!(first.status().is_success());
    assert!(second.status().is_success());

    let plants = app.get_plants().await.json::<Vec<Plant>>().await.unwrap();
    assert_eq!(plants.len(), 2);
    assert_ne!(plants[0].id, plants[1].id);
}

#[tokio::test]
async fn update_returns_stored_plant_unchanged() {
    let app = spawn_app().await;
    insert_plant(app.db_pool.clone(), "Golden Pothos", (7, 30, 365)).await;

    // Extra fields in the body are ignored; the stored record is echoed back.
    let response = app
        .post_update_plant(&json!({"name": "Golden Pothos", "days_between_water": 1}))
        .await;

    assert!(response.status().is_success());
    let plant: Plant = response.json().await.unwrap();
    assert_eq!(plant.name, "Golden Pothos");
    assert_eq!(plant.days_between_water, 7);

    let plants = app.get_plants().await.json::<Vec<Plant>>().await.unwrap();
    assert_eq!(plants, vec![plant]);
}

#[tokio::test]
async fn update_unknown_plant_is_not_found() {
    let app = spawn_app().await;

    let response = app.post_update_plant(&json!({"name": "Ficus"})).await;

    assert_eq!(response.status().as_u16(), 404);
}
