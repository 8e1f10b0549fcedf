// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Import mutations.
//!
//! The reporting surface itself never writes; these functions are the seam
//! used by the external result importer and by tests to seed the store.
//! Each function inserts one row and returns the generated id.
//!
//! All mutations use backend-agnostic Diesel DSL; the generated row id is
//! retrieved through the `PersistenceBackend` trait.

use diesel::prelude::*;
#[cfg(feature = "mysql")]
use diesel::MysqlConnection;
use diesel::SqliteConnection;
use tracing::debug;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{
    candidates, closest_losers, closest_winners, constituencies, direct_candidacies, elections,
    first_vote_results, mandate_winners, members, parties, seat_allocations, second_vote_results,
    turnout_records,
};
use crate::error::PersistenceError;

backend_fn! {
/// Inserts an election.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `year` - The election year
/// * `election_date` - The date the election was held (ISO 8601)
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_election(
    conn: &mut _,
    year: u16,
    election_date: &str,
) -> Result<i64, PersistenceError> {
    debug!("Importing election {year}");

    diesel::insert_into(elections::table)
        .values((
            elections::year.eq(i32::from(year)),
            elections::election_date.eq(election_date),
        ))
        .execute(conn)?;

    conn.get_last_insert_rowid()
}
}

backend_fn! {
/// Inserts a party.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_party(conn: &mut _, name: &str) -> Result<i64, PersistenceError> {
    diesel::insert_into(parties::table)
        .values(parties::name.eq(name))
        .execute(conn)?;

    conn.get_last_insert_rowid()
}
}

backend_fn! {
/// Inserts a constituency.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_constituency(conn: &mut _, name: &str) -> Result<i64, PersistenceError> {
    diesel::insert_into(constituencies::table)
        .values(constituencies::name.eq(name))
        .execute(conn)?;

    conn.get_last_insert_rowid()
}
}

backend_fn! {
/// Inserts a candidate.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_candidate(
    conn: &mut _,
    first_name: &str,
    last_name: &str,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(candidates::table)
        .values((
            candidates::first_name.eq(first_name),
            candidates::last_name.eq(last_name),
        ))
        .execute(conn)?;

    conn.get_last_insert_rowid()
}
}

backend_fn! {
/// Inserts a Bundestag member.
///
/// The candidate id links the member to the direct-mandate winner table;
/// list-seat members without a candidacy may pass `None`.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_member(
    conn: &mut _,
    election_id: i64,
    candidate_id: Option<i64>,
    first_name: &str,
    last_name: &str,
    party_name: &str,
    federal_state: &str,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(members::table)
        .values((
            members::election_id.eq(election_id),
            members::candidate_id.eq(candidate_id),
            members::first_name.eq(first_name),
            members::last_name.eq(last_name),
            members::party_name.eq(party_name),
            members::federal_state.eq(federal_state),
        ))
        .execute(conn)?;

    conn.get_last_insert_rowid()
}
}

backend_fn! {
/// Inserts a direct candidacy (a candidate running in a constituency).
///
/// Independents carry no party id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_direct_candidacy(
    conn: &mut _,
    election_id: i64,
    constituency_id: i64,
    candidate_id: i64,
    party_id: Option<i64>,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(direct_candidacies::table)
        .values((
            direct_candidacies::election_id.eq(election_id),
            direct_candidacies::constituency_id.eq(constituency_id),
            direct_candidacies::candidate_id.eq(candidate_id),
            direct_candidacies::party_id.eq(party_id),
        ))
        .execute(conn)?;

    conn.get_last_insert_rowid()
}
}

backend_fn! {
/// Inserts a direct-mandate winner record.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_mandate_winner(
    conn: &mut _,
    election_id: i64,
    constituency_id: i64,
    candidate_id: i64,
    party_id: Option<i64>,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(mandate_winners::table)
        .values((
            mandate_winners::election_id.eq(election_id),
            mandate_winners::constituency_id.eq(constituency_id),
            mandate_winners::candidate_id.eq(candidate_id),
            mandate_winners::party_id.eq(party_id),
        ))
        .execute(conn)?;

    conn.get_last_insert_rowid()
}
}

backend_fn! {
/// Inserts a first-vote tally for a candidate in a constituency.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_first_vote_result(
    conn: &mut _,
    election_id: i64,
    constituency_id: i64,
    candidate_id: i64,
    vote_count: i64,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(first_vote_results::table)
        .values((
            first_vote_results::election_id.eq(election_id),
            first_vote_results::constituency_id.eq(constituency_id),
            first_vote_results::candidate_id.eq(candidate_id),
            first_vote_results::vote_count.eq(vote_count),
        ))
        .execute(conn)?;

    conn.get_last_insert_rowid()
}
}

backend_fn! {
/// Inserts a second-vote tally for a party in a constituency.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_second_vote_result(
    conn: &mut _,
    election_id: i64,
    constituency_id: i64,
    party_id: i64,
    vote_count: i64,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(second_vote_results::table)
        .values((
            second_vote_results::election_id.eq(election_id),
            second_vote_results::constituency_id.eq(constituency_id),
            second_vote_results::party_id.eq(party_id),
            second_vote_results::vote_count.eq(vote_count),
        ))
        .execute(conn)?;

    conn.get_last_insert_rowid()
}
}

backend_fn! {
/// Inserts a seat allocation for a party.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_seat_allocation(
    conn: &mut _,
    election_id: i64,
    party_id: i64,
    seats: i64,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(seat_allocations::table)
        .values((
            seat_allocations::election_id.eq(election_id),
            seat_allocations::party_id.eq(party_id),
            seat_allocations::seats.eq(seats),
        ))
        .execute(conn)?;

    conn.get_last_insert_rowid()
}
}

backend_fn! {
/// Inserts a turnout record for a constituency.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_turnout_record(
    conn: &mut _,
    election_id: i64,
    constituency_id: i64,
    percentage: f64,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(turnout_records::table)
        .values((
            turnout_records::election_id.eq(election_id),
            turnout_records::constituency_id.eq(constituency_id),
            turnout_records::percentage.eq(percentage),
        ))
        .execute(conn)?;

    conn.get_last_insert_rowid()
}
}

backend_fn! {
/// Inserts a pre-computed closest-winner entry.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_closest_winner(
    conn: &mut _,
    election_id: i64,
    party_id: i64,
    first_name: &str,
    last_name: &str,
    constituency_id: i64,
    constituency_name: &str,
    margin: i64,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(closest_winners::table)
        .values((
            closest_winners::election_id.eq(election_id),
            closest_winners::party_id.eq(party_id),
            closest_winners::first_name.eq(first_name),
            closest_winners::last_name.eq(last_name),
            closest_winners::constituency_id.eq(constituency_id),
            closest_winners::constituency_name.eq(constituency_name),
            closest_winners::margin.eq(margin),
        ))
        .execute(conn)?;

    conn.get_last_insert_rowid()
}
}

backend_fn! {
/// Inserts a pre-computed closest-loser entry.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_closest_loser(
    conn: &mut _,
    election_id: i64,
    party_id: i64,
    first_name: &str,
    last_name: &str,
    constituency_id: i64,
    constituency_name: &str,
    margin: i64,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(closest_losers::table)
        .values((
            closest_losers::election_id.eq(election_id),
            closest_losers::party_id.eq(party_id),
            closest_losers::first_name.eq(first_name),
            closest_losers::last_name.eq(last_name),
            closest_losers::constituency_id.eq(constituency_id),
            closest_losers::constituency_name.eq(constituency_name),
            closest_losers::margin.eq(margin),
        ))
        .execute(conn)?;

    conn.get_last_insert_rowid()
}
}
