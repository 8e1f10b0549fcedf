// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Closest-race queries.
//!
//! The closest-winner and closest-loser tables are pre-computed per
//! (election, party) by the import process; these queries only select and
//! shape them.
//!
//! All queries are generated in backend-specific monomorphic versions
//! (`_sqlite` and `_mysql` suffixes) using the `backend_fn!` macro.

use diesel::prelude::*;
#[cfg(feature = "mysql")]
use diesel::MysqlConnection;
use diesel::SqliteConnection;
use wahlbericht_domain::{MarginEntry, MarginOutcome, PartyRef};

use crate::diesel_schema::{closest_losers, closest_winners, parties, second_vote_results};
use crate::error::PersistenceError;

/// Maximum number of margin entries returned per report.
const MARGIN_LIMIT: i64 = 10;

backend_fn! {
/// Lists the parties that received at least one second vote in an election,
/// ordered by name.
///
/// Used as the selector for the closest-races pages.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `election_id` - The election identifier
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn list_margin_parties(
    conn: &mut _,
    election_id: i64,
) -> Result<Vec<PartyRef>, PersistenceError> {
    let rows: Vec<(i64, String)> = second_vote_results::table
        .inner_join(parties::table)
        .filter(second_vote_results::election_id.eq(election_id))
        .filter(second_vote_results::vote_count.gt(0))
        .select((parties::party_id, parties::name))
        .distinct()
        .order(parties::name.asc())
        .load::<(i64, String)>(conn)?;

    let refs: Vec<PartyRef> = rows
        .into_iter()
        .map(|(party_id, name)| PartyRef { party_id, name })
        .collect();

    Ok(refs)
}
}

backend_fn! {
/// Builds the closest-margin report for one party in one election.
///
/// Up to ten narrowest winning margins are preferred; if the party has no
/// winner row at all, up to ten narrowest losing margins are returned
/// instead. The fallback is a hard either/or — the report never mixes
/// winners and losers.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `election_id` - The election identifier
/// * `party_id` - The party identifier
///
/// # Errors
///
/// Returns [`PersistenceError::PartyNotFound`] if the party id does not
/// resolve to a name.
pub fn get_closest_margins(
    conn: &mut _,
    election_id: i64,
    party_id: i64,
) -> Result<(String, MarginOutcome, Vec<MarginEntry>), PersistenceError> {
    let name_result = parties::table
        .select(parties::name)
        .filter(parties::party_id.eq(party_id))
        .first::<String>(conn);

    let party_name: String = match name_result {
        Ok(name) => name,
        Err(diesel::result::Error::NotFound) => {
            return Err(PersistenceError::PartyNotFound(party_id));
        }
        Err(e) => return Err(PersistenceError::from(e)),
    };

    type MarginRowTuple = (String, String, i64, String, i64);

    let winner_rows: Vec<MarginRowTuple> = closest_winners::table
        .filter(closest_winners::election_id.eq(election_id))
        .filter(closest_winners::party_id.eq(party_id))
        .order(closest_winners::margin.asc())
        .limit(MARGIN_LIMIT)
        .select((
            closest_winners::first_name,
            closest_winners::last_name,
            closest_winners::constituency_id,
            closest_winners::constituency_name,
            closest_winners::margin,
        ))
        .load::<MarginRowTuple>(conn)?;

    let (outcome, rows): (MarginOutcome, Vec<MarginRowTuple>) = if winner_rows.is_empty() {
        let loser_rows: Vec<MarginRowTuple> = closest_losers::table
            .filter(closest_losers::election_id.eq(election_id))
            .filter(closest_losers::party_id.eq(party_id))
            .order(closest_losers::margin.asc())
            .limit(MARGIN_LIMIT)
            .select((
                closest_losers::first_name,
                closest_losers::last_name,
                closest_losers::constituency_id,
                closest_losers::constituency_name,
                closest_losers::margin,
            ))
            .load::<MarginRowTuple>(conn)?;
        (MarginOutcome::Losers, loser_rows)
    } else {
        (MarginOutcome::Winners, winner_rows)
    };

    let entries: Vec<MarginEntry> = rows
        .into_iter()
        .map(
            |(first_name, last_name, constituency_id, constituency_name, margin)| MarginEntry {
                first_name,
                last_name,
                constituency_id,
                constituency_name,
                margin,
            },
        )
        .collect();

    Ok((party_name, outcome, entries))
}
}
