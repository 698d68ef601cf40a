//! # Registration
//!
//! A registration is written once by the create endpoint and never updated
//! or deleted afterwards.
use std::fmt;

use chrono::{NaiveDateTime, TimeZone, Utc};
use diesel::{Identifiable, Insertable, Queryable, debug_query, prelude::*};
use diesel::dsl;
use diesel::pg::{Pg, PgConnection};
use diesel::result::Error;
use uuid::Uuid;

use crate::logger::Logger;

pub use crate::schema::registrations;

/// NewRegistration
///
/// Only built from a request which has passed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct NewRegistration {
    pub full_name: String,
    pub phone_number: String,
    pub attendance_date: String,
}

impl fmt::Display for NewRegistration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<NewRegistration {date}>", date = self.attendance_date)
    }
}

type AllColumns = (
    registrations::id,
    registrations::uuid,
    registrations::full_name,
    registrations::phone_number,
    registrations::attendance_date,
    registrations::registration_date,
    registrations::created_at,
);

const ALL_COLUMNS: AllColumns = (
    registrations::id,
    registrations::uuid,
    registrations::full_name,
    registrations::phone_number,
    registrations::attendance_date,
    registrations::registration_date,
    registrations::created_at,
);

// timestamps are stored in UTC without offset
fn as_utc<S>(t: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error>
where S: serde::Serializer {
    serde::Serialize::serialize(&Utc.from_utc_datetime(t), s)
}

/// Registration
#[derive(
    Clone,
    Debug,
    Identifiable,
    Insertable,
    PartialEq,
    Queryable,
    Serialize,
)]
#[table_name = "registrations"]
pub struct Registration {
    #[serde(skip_serializing)]
    pub id: i64,
    #[serde(rename = "id")]
    pub uuid: Uuid,
    pub full_name: String,
    pub phone_number: String,
    pub attendance_date: String,
    #[serde(serialize_with = "as_utc")]
    pub registration_date: NaiveDateTime,
    #[serde(serialize_with = "as_utc")]
    pub created_at: NaiveDateTime,
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<Registration {uuid}>", uuid = &self.uuid.to_string())
    }
}

type All = dsl::Select<registrations::table, AllColumns>;

impl Registration {
    pub fn all() -> All {
        registrations::table.select(ALL_COLUMNS)
    }

    /// Returns every registration, the newest first.
    ///
    /// Rows sharing the same `created_at` are ordered by id.
    pub fn recent(
        conn: &PgConnection,
        logger: &Logger,
    ) -> Result<Vec<Self>, Error>
    {
        let q = Self::all().order((
            registrations::created_at.desc(),
            registrations::id.desc(),
        ));

        info!(logger, "{}", debug_query::<Pg, _>(&q).to_string());

        q.load::<Self>(conn).map_err(|e| {
            error!(logger, "err: {}", e);
            e
        })
    }

    /// Saves a new registration.
    ///
    /// `registration_date` and `created_at` are both stamped with the current
    /// UTC time.
    pub fn insert(
        registration: &NewRegistration,
        conn: &PgConnection,
        logger: &Logger,
    ) -> Result<Self, Error>
    {
        let uuid = Uuid::new_v4();
        let now = Utc::now().naive_utc();
        let q = diesel::insert_into(registrations::table).values((
            registrations::uuid.eq(uuid),
            registrations::full_name.eq(&registration.full_name),
            registrations::phone_number.eq(&registration.phone_number),
            registrations::attendance_date.eq(&registration.attendance_date),
            registrations::registration_date.eq(now),
            registrations::created_at.eq(now),
        ));

        info!(logger, "{}", debug_query::<Pg, _>(&q).to_string());

        q.get_result::<Self>(conn).map_err(|e| {
            error!(logger, "err: {}", e);
            e
        })
    }
}
