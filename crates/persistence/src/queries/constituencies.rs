// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Constituency overview and detail queries.
//!
//! All queries are generated in backend-specific monomorphic versions
//! (`_sqlite` and `_mysql` suffixes) using the `backend_fn!` macro.

use std::collections::HashMap;

use diesel::prelude::*;
#[cfg(feature = "mysql")]
use diesel::MysqlConnection;
use diesel::SqliteConnection;
use wahlbericht_domain::{
    CandidateResult, ConstituencyDetail, ConstituencySummary, PartyResult, PartyVotes,
    leading_party, vote_share,
};

use crate::diesel_schema::{
    candidates, constituencies, direct_candidacies, first_vote_results, mandate_winners, parties,
    second_vote_results, turnout_records,
};
use crate::error::PersistenceError;

backend_fn! {
/// Builds the per-constituency overview for an election.
///
/// Only constituencies with a recorded direct-mandate winner appear in the
/// result: the absence of a winner row silences that constituency. This is
/// the caller-visible contract, not an accident of the join.
///
/// The second-vote leader is selected by the strictly-more-votes rule over
/// the constituency's second-vote rows; ties collapse to the lowest party
/// id. A constituency without any second-vote rows carries `None`.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `election_id` - The election identifier
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn get_overview(
    conn: &mut _,
    election_id: i64,
) -> Result<Vec<ConstituencySummary>, PersistenceError> {
    let winner_rows: Vec<(i64, String, Option<String>)> = mandate_winners::table
        .inner_join(constituencies::table)
        .left_join(parties::table)
        .filter(mandate_winners::election_id.eq(election_id))
        .order(mandate_winners::constituency_id.asc())
        .select((
            mandate_winners::constituency_id,
            constituencies::name,
            parties::name.nullable(),
        ))
        .load::<(i64, String, Option<String>)>(conn)?;

    let vote_rows: Vec<(i64, i64, String, i64)> = second_vote_results::table
        .inner_join(parties::table)
        .filter(second_vote_results::election_id.eq(election_id))
        .select((
            second_vote_results::constituency_id,
            parties::party_id,
            parties::name,
            second_vote_results::vote_count,
        ))
        .load::<(i64, i64, String, i64)>(conn)?;

    let mut votes_by_constituency: HashMap<i64, Vec<PartyVotes>> = HashMap::new();
    for (constituency_id, party_id, name, votes) in vote_rows {
        votes_by_constituency
            .entry(constituency_id)
            .or_default()
            .push(PartyVotes {
                party_id,
                name,
                votes,
            });
    }

    let summaries: Vec<ConstituencySummary> = winner_rows
        .into_iter()
        .map(|(constituency_id, name, winner_party)| {
            let leading: Option<String> = votes_by_constituency
                .get(&constituency_id)
                .and_then(|rows| leading_party(rows))
                .map(|p| p.name.clone());

            ConstituencySummary {
                constituency_id,
                name,
                winner_party,
                leading_party: leading,
            }
        })
        .collect();

    Ok(summaries)
}
}

backend_fn! {
/// Builds the full result report for one constituency in one election.
///
/// Four independent queries: the winner header, the first-vote candidate
/// list, the second-vote party list, and the turnout figure. Vote-share
/// denominators are summed fresh per call and scoped to this
/// (election, constituency) pair. The queries run under autocommit, so
/// the report is not atomic across them; this historical, read-mostly
/// data makes that acceptable.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `election_id` - The election identifier
/// * `constituency_id` - The constituency identifier
///
/// # Errors
///
/// Returns [`PersistenceError::ConstituencyNotFound`] if no direct-mandate
/// winner is recorded for the pair, which the header fields require.
pub fn get_detail(
    conn: &mut _,
    election_id: i64,
    constituency_id: i64,
) -> Result<ConstituencyDetail, PersistenceError> {
    let header = mandate_winners::table
        .inner_join(constituencies::table)
        .inner_join(candidates::table)
        .filter(mandate_winners::election_id.eq(election_id))
        .filter(mandate_winners::constituency_id.eq(constituency_id))
        .select((
            constituencies::name,
            candidates::first_name,
            candidates::last_name,
        ))
        .first::<(String, String, String)>(conn);

    let (name, winner_first_name, winner_last_name) = match header {
        Ok(row) => row,
        Err(diesel::result::Error::NotFound) => {
            return Err(PersistenceError::ConstituencyNotFound {
                election_id,
                constituency_id,
            });
        }
        Err(e) => return Err(PersistenceError::from(e)),
    };

    // First-vote results, with each candidate's nominating party resolved
    // through the candidacy table (None for independents).
    let candidate_rows: Vec<(i64, String, String, i64)> = first_vote_results::table
        .inner_join(candidates::table)
        .filter(first_vote_results::election_id.eq(election_id))
        .filter(first_vote_results::constituency_id.eq(constituency_id))
        .order(first_vote_results::vote_count.desc())
        .select((
            candidates::candidate_id,
            candidates::first_name,
            candidates::last_name,
            first_vote_results::vote_count,
        ))
        .load::<(i64, String, String, i64)>(conn)?;

    let nomination_rows: Vec<(i64, Option<String>)> = direct_candidacies::table
        .left_join(parties::table)
        .filter(direct_candidacies::election_id.eq(election_id))
        .filter(direct_candidacies::constituency_id.eq(constituency_id))
        .select((direct_candidacies::candidate_id, parties::name.nullable()))
        .load::<(i64, Option<String>)>(conn)?;
    let party_by_candidate: HashMap<i64, Option<String>> = nomination_rows.into_iter().collect();

    let first_vote_total: i64 = candidate_rows.iter().map(|row| row.3).sum();
    let candidates_list: Vec<CandidateResult> = candidate_rows
        .into_iter()
        .map(|(candidate_id, first_name, last_name, votes)| CandidateResult {
            name: format!("{first_name} {last_name}"),
            party: party_by_candidate.get(&candidate_id).cloned().flatten(),
            votes,
            percentage: vote_share(votes, first_vote_total),
        })
        .collect();

    let party_rows: Vec<(String, i64)> = second_vote_results::table
        .inner_join(parties::table)
        .filter(second_vote_results::election_id.eq(election_id))
        .filter(second_vote_results::constituency_id.eq(constituency_id))
        .order(second_vote_results::vote_count.desc())
        .select((parties::name, second_vote_results::vote_count))
        .load::<(String, i64)>(conn)?;

    let second_vote_total: i64 = party_rows.iter().map(|row| row.1).sum();
    let parties_list: Vec<PartyResult> = party_rows
        .into_iter()
        .map(|(party, votes)| PartyResult {
            party,
            votes,
            percentage: vote_share(votes, second_vote_total),
        })
        .collect();

    // Turnout may not have been recorded yet; absence is valid.
    let turnout: Option<f64> = turnout_records::table
        .filter(turnout_records::election_id.eq(election_id))
        .filter(turnout_records::constituency_id.eq(constituency_id))
        .select(turnout_records::percentage)
        .first::<f64>(conn)
        .optional()?;

    Ok(ConstituencyDetail {
        constituency_id,
        name,
        winner_first_name,
        winner_last_name,
        turnout,
        candidates: candidates_list,
        parties: parties_list,
    })
}
}
