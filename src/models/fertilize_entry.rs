use diesel::backend::Backend;
use diesel::dsl::{AsSelect, Select};
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use serde::{Deserialize, Serialize};

use crate::database::DbConn;
use crate::schema::fertilize_entry;

type BoxedQuery<'a> = fertilize_entry::BoxedQuery<'a, Sqlite, fertilize_entry::SqlType>;

/// A timestamped record of one fertilizing.
#[derive(Clone, Debug, PartialEq, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = fertilize_entry)]
pub struct FertilizeEntry {
    pub id: i32,
    pub plant_id: i32,
    pub created_at: String,
}

impl FertilizeEntry {
    pub fn all<DB>() -> Select<fertilize_entry::table, AsSelect<FertilizeEntry, DB>>
    where
        DB: Backend,
    {
        fertilize_entry::table.select(FertilizeEntry::as_select())
    }

    pub fn by_plant(plant: i32) -> BoxedQuery<'static> {
        fertilize_entry::table
            .filter(fertilize_entry::plant_id.eq(plant))
            .into_boxed()
    }

    pub fn create(conn: &mut DbConn, plant: i32, stamp: &str) -> QueryResult<usize> {
        diesel::insert_into(fertilize_entry::table)
            .values((
                fertilize_entry::plant_id.eq(plant),
                fertilize_entry::created_at.eq(stamp),
            ))
            .execute(conn)
    }
}
