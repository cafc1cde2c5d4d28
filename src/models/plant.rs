use actix_web::{web, web::Data};
use anyhow::{anyhow, Error};
use diesel::backend::Backend;
use diesel::dsl::{AsSelect, Select};
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use serde::{Deserialize, Serialize};

use crate::database::DbPool;
use crate::schema::plant;

type BoxedQuery<'a> = plant::BoxedQuery<'a, Sqlite, plant::SqlType>;

/// A tracked houseplant. The `days_between_*` columns describe the intended
/// cadence of each care action; they are stored and returned but never drive
/// any computation.
#[derive(Clone, Debug, PartialEq, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = plant)]
pub struct Plant {
    pub id: i32,
    pub name: String,
    pub days_between_water: i32,
    pub days_between_fertilizer: i32,
    pub days_between_repot: i32,
}

impl Plant {
    // Composable queries
    pub fn all<DB>() -> Select<plant::table, AsSelect<Plant, DB>>
    where
        DB: Backend,
    {
        plant::table.select(Plant::as_select())
    }

    /// First plant whose name matches exactly. Names are not unique; with
    /// duplicates the earliest row by storage order wins.
    pub fn by_name(plant_name: String) -> BoxedQuery<'static> {
        plant::table
            .filter(plant::name.eq(plant_name))
            .into_boxed()
    }

    pub fn names() -> Select<plant::table, plant::name> {
        plant::table.select(plant::name)
    }

    #[tracing::instrument(name = "Create plant", skip(db))]
    pub async fn create(
        plant_name: String,
        water_days: i32,
        fertilizer_days: i32,
        repot_days: i32,
        db: Data<DbPool>,
    ) -> Result<Plant, Error> {
        let new_plant: Plant = web::block(move || {
            let mut conn = db.get().expect("Could not get a db connection.");

            diesel::insert_into(plant::table)
                .values((
                    plant::name.eq(plant_name),
                    plant::days_between_water.eq(water_days),
                    plant::days_between_fertilizer.eq(fertilizer_days),
                    plant::days_between_repot.eq(repot_days),
                ))
                .get_result(&mut conn)
        })
        .await?
        .map_err(|e| anyhow!("Internal server error when creating plant: {e}"))?;

        Ok(new_plant)
    }
}
