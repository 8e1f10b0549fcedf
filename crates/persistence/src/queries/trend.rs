// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Nationwide second-vote totals for the historical share trend.
//!
//! All queries are generated in backend-specific monomorphic versions
//! (`_sqlite` and `_mysql` suffixes) using the `backend_fn!` macro.

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Nullable};
#[cfg(feature = "mysql")]
use diesel::MysqlConnection;
use diesel::SqliteConnection;

use crate::diesel_schema::{parties, second_vote_results};
use crate::error::PersistenceError;

backend_fn! {
/// Sums each party's second votes across all constituencies of an election.
///
/// Returns (party name, nationwide vote total) pairs ordered by total
/// descending. The election total — the share denominator — is the sum of
/// the returned totals; the API layer computes shares from it so that the
/// rounding behaves identically on every backend.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `election_id` - The election identifier
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn party_vote_totals(
    conn: &mut _,
    election_id: i64,
) -> Result<Vec<(String, i64)>, PersistenceError> {
    let rows: Vec<(String, Option<i64>)> = second_vote_results::table
        .inner_join(parties::table)
        .filter(second_vote_results::election_id.eq(election_id))
        .group_by((parties::party_id, parties::name))
        .select((
            parties::name,
            sql::<Nullable<BigInt>>("SUM(second_vote_results.vote_count)"),
        ))
        .load::<(String, Option<i64>)>(conn)?;

    let mut totals: Vec<(String, i64)> = rows
        .into_iter()
        .map(|(name, total)| (name, total.unwrap_or_default()))
        .collect();
    totals.sort_by(|a, b| b.1.cmp(&a.1));

    Ok(totals)
}
}
