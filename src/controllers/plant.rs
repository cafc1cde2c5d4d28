use actix_web::{error, get, post, web, web::Data, HttpResponse, Result};
use diesel::result::Error::NotFound;
use diesel::RunQueryDsl;
use serde::Deserialize;

use crate::controllers::{ApiResponse, ApiStatus};
use crate::database::DbPool;
use crate::models::plant::Plant;
use crate::util::spawn_blocking_with_tracing;

#[derive(Debug, Deserialize)]
pub struct CreatePlantParams {
    pub name: String,
    pub days_between_water: i32,
    pub days_between_fertilizer: i32,
    pub days_between_repot: i32,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePlantParams {
    pub name: String,
}

#[get("")]
#[tracing::instrument(skip(db))]
pub async fn plants(db: Data<DbPool>) -> Result<HttpResponse> {
    let plants = spawn_blocking_with_tracing(move || {
        let mut conn = db.get().expect("Could not get a db connection.");
        Plant::all().load::<Plant>(&mut conn)
    })
    .await
    .map_err(|e| {
        tracing::error!(
            target = module_path!(),
            error = e.to_string(),
            "Error while spawning a blocking task"
        );
        error::ErrorInternalServerError("Internal server error.")
    })?
    .map_err(|e| {
        tracing::error!(
            target = module_path!(),
            error = e.to_string(),
            "Error while listing plants"
        );
        error::ErrorInternalServerError("Internal server error.")
    })?;

    Ok(HttpResponse::Ok().json(plants))
}

#[get("/name")]
#[tracing::instrument(skip(db))]
pub async fn plant_names(db: Data<DbPool>) -> Result<HttpResponse> {
    let names = spawn_blocking_with_tracing(move || {
        let mut conn = db.get().expect("Could not get a db connection.");
        Plant::names().load::<String>(&mut conn)
    })
    .await
    .map_err(|e| {
        tracing::error!(
            target = module_path!(),
            error = e.to_string(),
            "Error while spawning a blocking task"
        );
        error::ErrorInternalServerError("Internal server error.")
    })?
    .map_err(|e| {
        tracing::error!(
            target = module_path!(),
            error = e.to_string(),
            "Error while listing plant names"
        );
        error::ErrorInternalServerError("Internal server error.")
    })?;

    Ok(HttpResponse::Ok().json(names))
}

#[post("/create")]
#[tracing::instrument(skip(params, db))]
pub async fn create_plant(
    params: web::Json<CreatePlantParams>,
    db: Data<DbPool>,
) -> Result<HttpResponse> {
    let params = params.into_inner();

    let new_plant = match Plant::create(
        params.name,
        params.days_between_water,
        params.days_between_fertilizer,
        params.days_between_repot,
        db,
    )
    .await
    {
        Ok(new_plant) => new_plant,
        Err(e) => {
            return Ok(ApiResponse::bad_request(e.to_string()));
        }
    };

    tracing::info!(
        target = module_path!(),
        id = new_plant.id,
        name = new_plant.name,
        "Added plant"
    );

    Ok(ApiStatus::ok())
}

// Lookup only; this route has never applied field changes and clients depend
// on the echo of the stored record.
#[post("/update")]
#[tracing::instrument(skip(params, db))]
pub async fn update_plant(
    params: web::Json<UpdatePlantParams>,
    db: Data<DbPool>,
) -> Result<HttpResponse> {
    let plant_name = params.into_inner().name;

    let plant = spawn_blocking_with_tracing(move || {
        let mut conn = db.get().expect("Could not get a db connection.");
        Plant::by_name(plant_name).first::<Plant>(&mut conn)
    })
    .await
    .map_err(|e| {
        tracing::error!(
            target = module_path!(),
            error = e.to_string(),
            "Error while spawning a blocking task"
        );
        error::ErrorInternalServerError("Internal server error.")
    })?
    .map_err(|e| {
        if e == NotFound {
            return error::ErrorNotFound(serde_json::json!({
                "message": "Plant not found."
            }));
        };

        tracing::error!(
            target = module_path!(),
            error = e.to_string(),
            "Error while looking up plant"
        );

        error::ErrorInternalServerError("Internal server error.")
    })?;

    Ok(HttpResponse::Ok().json(plant))
}
