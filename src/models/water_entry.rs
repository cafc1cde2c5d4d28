use diesel::backend::Backend;
use diesel::dsl::{AsSelect, Select};
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use serde::{Deserialize, Serialize};

use crate::database::DbConn;
use crate::schema::water_entry;

type BoxedQuery<'a> = water_entry::BoxedQuery<'a, Sqlite, water_entry::SqlType>;

/// A timestamped record of one watering. `created_at` holds the timestamp
/// exactly as the caller supplied it.
#[derive(Clone, Debug, PartialEq, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = water_entry)]
pub struct WaterEntry {
    pub id: i32,
    pub plant_id: i32,
    pub created_at: String,
}

impl WaterEntry {
    pub fn all<DB>() -> Select<water_entry::table, AsSelect<WaterEntry, DB>>
    where
        DB: Backend,
    {
        water_entry::table.select(WaterEntry::as_select())
    }

    pub fn by_plant(plant: i32) -> BoxedQuery<'static> {
        water_entry::table
            .filter(water_entry::plant_id.eq(plant))
            .into_boxed()
    }

    pub fn create(conn: &mut DbConn, plant: i32, stamp: &str) -> QueryResult<usize> {
        diesel::insert_into(water_entry::table)
            .values((
                water_entry::plant_id.eq(plant),
                water_entry::created_at.eq(stamp),
            ))
            .execute(conn)
    }
}
