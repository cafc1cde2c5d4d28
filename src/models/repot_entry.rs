use diesel::backend::Backend;
use diesel::dsl::{AsSelect, Select};
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use serde::{Deserialize, Serialize};

use crate::database::DbConn;
use crate::schema::repot_entry;

type BoxedQuery<'a> = repot_entry::BoxedQuery<'a, Sqlite, repot_entry::SqlType>;

/// A timestamped record of one repotting.
#[derive(Clone, Debug, PartialEq, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = repot_entry)]
pub struct RepotEntry {
    pub id: i32,
    pub plant_id: i32,
    pub created_at: String,
}

impl RepotEntry {
    pub fn all<DB>() -> Select<repot_entry::table, AsSelect<RepotEntry, DB>>
    where
        DB: Backend,
    {
        repot_entry::table.select(RepotEntry::as_select())
    }

    pub fn by_plant(plant: i32) -> BoxedQuery<'static> {
        repot_entry::table
            .filter(repot_entry::plant_id.eq(plant))
            .into_boxed()
    }

    pub fn create(conn: &mut DbConn, plant: i32, stamp: &str) -> QueryResult<usize> {
        diesel::insert_into(repot_entry::table)
            .values((
                repot_entry::plant_id.eq(plant),
                repot_entry::created_at.eq(stamp),
            ))
            .execute(conn)
    }
}
