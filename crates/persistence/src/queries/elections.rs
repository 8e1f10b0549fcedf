// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Election catalog queries.
//!
//! All queries are generated in backend-specific monomorphic versions
//! (`_sqlite` and `_mysql` suffixes) using the `backend_fn!` macro.

use diesel::prelude::*;
#[cfg(feature = "mysql")]
use diesel::MysqlConnection;
use diesel::SqliteConnection;
use num_traits::ToPrimitive;
use time::Date;
use wahlbericht_domain::ElectionInfo;

use crate::diesel_schema::elections;
use crate::error::PersistenceError;

backend_fn! {
/// Lists all imported elections, oldest first.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database cannot be queried or if a stored
/// year or date cannot be reconstructed.
pub fn list_elections(conn: &mut _) -> Result<Vec<ElectionInfo>, PersistenceError> {
    let rows: Vec<(i64, i32, String)> = elections::table
        .select((
            elections::election_id,
            elections::year,
            elections::election_date,
        ))
        .order(elections::year.asc())
        .load::<(i64, i32, String)>(conn)?;

    let mut result: Vec<ElectionInfo> = Vec::new();
    for (election_id, year_i32, date_str) in rows {
        let year: u16 = year_i32.to_u16().ok_or_else(|| {
            PersistenceError::Other(format!("Election year out of range: {year_i32}"))
        })?;

        let election_date: Date = Date::parse(
            &date_str,
            &time::format_description::well_known::Iso8601::DEFAULT,
        )
        .map_err(|e| {
            PersistenceError::Other(format!("Failed to parse election date '{date_str}': {e}"))
        })?;

        result.push(ElectionInfo {
            election_id,
            year,
            election_date,
        });
    }

    Ok(result)
}
}

backend_fn! {
/// Looks up the year of an election, doubling as the existence check
/// every reporting operation performs on its election argument.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `election_id` - The election identifier
///
/// # Errors
///
/// Returns [`PersistenceError::ElectionNotFound`] if the election does
/// not exist.
pub fn lookup_election_year(conn: &mut _, election_id: i64) -> Result<u16, PersistenceError> {
    let result = elections::table
        .select(elections::year)
        .filter(elections::election_id.eq(election_id))
        .first::<i32>(conn);

    match result {
        Ok(year_i32) => year_i32
            .to_u16()
            .ok_or_else(|| PersistenceError::Other("Year out of range".to_string())),
        Err(diesel::result::Error::NotFound) => {
            Err(PersistenceError::ElectionNotFound(election_id))
        }
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}
