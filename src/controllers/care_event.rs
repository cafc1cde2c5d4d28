use std::fmt;

use actix_web::{error, post, web, web::Data, HttpResponse, Result};
use diesel::prelude::*;
use serde::Deserialize;
use thiserror::Error;

use crate::controllers::{ApiResponse, ApiStatus};
use crate::database::{DbConn, DbPool};
use crate::models::fertilize_entry::FertilizeEntry;
use crate::models::plant::Plant;
use crate::models::repot_entry::RepotEntry;
use crate::models::water_entry::WaterEntry;
use crate::util::spawn_blocking_with_tracing;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CareEventKind {
    Fertilize,
    Repot,
    Water,
}

impl fmt::Display for CareEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CareEventKind::Fertilize => write!(f, "fertilize"),
            CareEventKind::Repot => write!(f, "repot"),
            CareEventKind::Water => write!(f, "water"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CareEventError {
    #[error("no plant named \"{0}\"")]
    UnknownPlant(String),
    #[error(transparent)]
    Database(#[from] diesel::result::Error),
}

/// The `plant_names` field accepts a bare string for a single plant as well
/// as a list; both normalize to a list before any database work.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PlantNames {
    One(String),
    Many(Vec<String>),
}

impl PlantNames {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            PlantNames::One(name) => vec![name],
            PlantNames::Many(names) => names,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CareEventParams {
    pub plant_names: PlantNames,
    pub datetime: String,
}

#[post("/water")]
#[tracing::instrument(skip(params, db))]
pub async fn water(params: web::Json<CareEventParams>, db: Data<DbPool>) -> Result<HttpResponse> {
    record_care_event(CareEventKind::Water, params.into_inner(), db).await
}

#[post("/fertilize")]
#[tracing::instrument(skip(params, db))]
pub async fn fertilize(
    params: web::Json<CareEventParams>,
    db: Data<DbPool>,
) -> Result<HttpResponse> {
    record_care_event(CareEventKind::Fertilize, params.into_inner(), db).await
}

#[post("/repot")]
#[tracing::instrument(skip(params, db))]
pub async fn repot(params: web::Json<CareEventParams>, db: Data<DbPool>) -> Result<HttpResponse> {
    record_care_event(CareEventKind::Repot, params.into_inner(), db).await
}

/// Resolves every name to a plant and appends one entry per plant, all inside
/// a single transaction; an unknown name rolls back the whole batch.
async fn record_care_event(
    kind: CareEventKind,
    params: CareEventParams,
    db: Data<DbPool>,
) -> Result<HttpResponse> {
    let names = params.plant_names.into_vec();
    let stamp = params.datetime;

    let result = spawn_blocking_with_tracing(move || {
        let mut conn = db.get().expect("Could not get a db connection.");

        conn.transaction::<_, CareEventError, _>(|conn| {
            for plant_name in names {
                let plant = Plant::by_name(plant_name.clone())
                    .first::<Plant>(conn)
                    .optional()?
                    .ok_or(CareEventError::UnknownPlant(plant_name))?;

                insert_entry(conn, kind, plant.id, &stamp)?;
            }

            Ok(())
        })
    })
    .await
    .map_err(|e| {
        tracing::error!(
            target = module_path!(),
            error = e.to_string(),
            "Error while spawning a blocking task"
        );
        error::ErrorInternalServerError("Internal server error.")
    })?;

    match result {
        Ok(()) => {
            tracing::info!(target = module_path!(), kind = %kind, "Recorded care events");
            Ok(ApiStatus::ok())
        }
        Err(CareEventError::UnknownPlant(name)) => {
            Ok(ApiResponse::not_found(format!("No plant named \"{name}\".")))
        }
        Err(CareEventError::Database(e)) => {
            tracing::error!(
                target = module_path!(),
                error = e.to_string(),
                kind = %kind,
                "Error while recording care events"
            );
            Ok(ApiResponse::internal_server_error())
        }
    }
}

fn insert_entry(
    conn: &mut DbConn,
    kind: CareEventKind,
    plant_id: i32,
    stamp: &str,
) -> QueryResult<usize> {
    match kind {
        CareEventKind::Fertilize => FertilizeEntry::create(conn, plant_id, stamp),
        CareEventKind::Repot => RepotEntry::create(conn, plant_id, stamp),
        CareEventKind::Water => WaterEntry::create(conn, plant_id, stamp),
    }
}
