// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seat allocation queries.
//!
//! All queries are generated in backend-specific monomorphic versions
//! (`_sqlite` and `_mysql` suffixes) using the `backend_fn!` macro.

use diesel::prelude::*;
#[cfg(feature = "mysql")]
use diesel::MysqlConnection;
use diesel::SqliteConnection;

use crate::diesel_schema::{parties, seat_allocations};
use crate::error::PersistenceError;

backend_fn! {
/// Lists the seat totals per party for an election, largest first.
///
/// Color resolution is a display concern and happens in the API layer;
/// this query only returns the stored (party name, seat count) pairs.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `election_id` - The election identifier
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn get_seat_totals(
    conn: &mut _,
    election_id: i64,
) -> Result<Vec<(String, i64)>, PersistenceError> {
    let rows: Vec<(String, i64)> = seat_allocations::table
        .inner_join(parties::table)
        .filter(seat_allocations::election_id.eq(election_id))
        .order(seat_allocations::seats.desc())
        .select((parties::name, seat_allocations::seats))
        .load::<(String, i64)>(conn)?;

    Ok(rows)
}
}
