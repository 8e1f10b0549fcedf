// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Wahlbericht reporting backend.
//!
//! Each reporting operation is a plain function over an injected
//! [`Persistence`] handle (and the injected [`DisplayConfig`] where display
//! data is resolved). Operations are fully synchronous reads: they either
//! succeed with a complete response or fail with an [`ApiError`] — never a
//! partially populated record.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod error;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_persistence_error};
pub use request_response::{
    ClosestMarginsResponse, CompositionResponse, ConstituencyDetailResponse,
    ConstituencyOverviewResponse, ElectionsResponse, MarginPartiesResponse, MarginReport,
    MembersResponse, TrendResponse,
};

use wahlbericht_domain::{
    ConstituencyDetail, ConstituencySummary, DisplayConfig, ElectionInfo, MarginEntry,
    MarginOutcome, Member, PartyRef, SeatEntry, VoteSharePoint, VoteShareSeries, vote_share,
};
use wahlbericht_persistence::Persistence;

/// Lists all imported elections, oldest first.
///
/// # Arguments
///
/// * `persistence` - The persistence handle
///
/// # Errors
///
/// Returns an error if the store cannot be queried.
pub fn list_elections(persistence: &mut Persistence) -> Result<ElectionsResponse, ApiError> {
    let elections: Vec<ElectionInfo> = persistence
        .list_elections()
        .map_err(translate_persistence_error)?;

    Ok(ElectionsResponse { elections })
}

/// Builds the member roster report for an election.
///
/// An empty roster for an existing election is valid; only an unknown
/// election id is an error.
///
/// # Arguments
///
/// * `persistence` - The persistence handle
/// * `election_id` - The election identifier
///
/// # Errors
///
/// Returns `ResourceNotFound` if the election does not exist.
pub fn get_members(
    persistence: &mut Persistence,
    election_id: i64,
) -> Result<MembersResponse, ApiError> {
    let members: Vec<Member> = persistence
        .get_members(election_id)
        .map_err(translate_persistence_error)?;

    Ok(MembersResponse {
        election: election_id,
        members,
    })
}

/// Builds the constituency overview report for an election.
///
/// Constituencies without a recorded direct-mandate winner do not appear:
/// the absence of a winner silences that constituency from the overview.
///
/// # Arguments
///
/// * `persistence` - The persistence handle
/// * `election_id` - The election identifier
///
/// # Errors
///
/// Returns `ResourceNotFound` if the election does not exist.
pub fn get_constituency_overview(
    persistence: &mut Persistence,
    election_id: i64,
) -> Result<ConstituencyOverviewResponse, ApiError> {
    let wahlkreise: Vec<ConstituencySummary> = persistence
        .get_constituency_overview(election_id)
        .map_err(translate_persistence_error)?;

    Ok(ConstituencyOverviewResponse {
        election: election_id,
        wahlkreise,
    })
}

/// Builds the full report for one constituency in one election.
///
/// # Arguments
///
/// * `persistence` - The persistence handle
/// * `election_id` - The election identifier
/// * `constituency_id` - The constituency identifier
///
/// # Errors
///
/// Returns `ResourceNotFound` if the election does not exist or if no
/// direct-mandate winner is recorded for the pair.
pub fn get_constituency_detail(
    persistence: &mut Persistence,
    election_id: i64,
    constituency_id: i64,
) -> Result<ConstituencyDetailResponse, ApiError> {
    let details: ConstituencyDetail = persistence
        .get_constituency_detail(election_id, constituency_id)
        .map_err(translate_persistence_error)?;

    Ok(ConstituencyDetailResponse {
        election: election_id,
        details,
    })
}

/// Builds the seat composition report for an election.
///
/// Every party's display color is resolved through the injected color
/// table; a party without an entry fails the whole report with
/// [`ApiError::UnknownParty`].
///
/// # Arguments
///
/// * `persistence` - The persistence handle
/// * `config` - The display configuration
/// * `election_id` - The election identifier
///
/// # Errors
///
/// Returns `ResourceNotFound` if the election does not exist, and
/// `UnknownParty` if the color table is stale.
pub fn get_composition(
    persistence: &mut Persistence,
    config: &DisplayConfig,
    election_id: i64,
) -> Result<CompositionResponse, ApiError> {
    let totals: Vec<(String, i64)> = persistence
        .get_seat_totals(election_id)
        .map_err(translate_persistence_error)?;

    let mut parties: Vec<SeatEntry> = Vec::with_capacity(totals.len());
    for (party, seats) in totals {
        let color: String = config.color_for(&party)?.to_string();
        parties.push(SeatEntry {
            party,
            seats,
            color,
        });
    }

    Ok(CompositionResponse {
        election: election_id,
        parties,
    })
}

/// Builds the historical vote-share trend for an explicit election list.
///
/// For each requested election, in request order: the nationwide per-party
/// second-vote shares, filtered to the interesting-party allow-list and
/// ordered by share descending. The series index is the election's position
/// in the request list and the label is its year.
///
/// # Arguments
///
/// * `persistence` - The persistence handle
/// * `config` - The display configuration
/// * `elections` - The election identifiers to chart, in display order
///
/// # Errors
///
/// Returns `ResourceNotFound` if any requested election does not exist.
pub fn get_vote_share_trend(
    persistence: &mut Persistence,
    config: &DisplayConfig,
    elections: &[i64],
) -> Result<TrendResponse, ApiError> {
    let mut bar_series: Vec<VoteShareSeries> = Vec::with_capacity(elections.len());

    for (index, &election_id) in elections.iter().enumerate() {
        let year: u16 = persistence
            .lookup_election_year(election_id)
            .map_err(translate_persistence_error)?;

        let totals: Vec<(String, i64)> = persistence
            .party_vote_totals(election_id)
            .map_err(translate_persistence_error)?;

        // The share denominator is the election's full second-vote count,
        // summed before the allow-list filter is applied.
        let election_total: i64 = totals.iter().map(|t| t.1).sum();

        let data: Vec<VoteSharePoint> = totals
            .into_iter()
            .filter(|(party, _)| config.is_interesting(party))
            .map(|(party, votes)| VoteSharePoint {
                party,
                share: vote_share(votes, election_total),
            })
            .collect();

        bar_series.push(VoteShareSeries {
            index,
            name: year,
            data,
        });
    }

    Ok(TrendResponse { bar_series })
}

/// Lists the parties selectable on the closest-races pages.
///
/// # Arguments
///
/// * `persistence` - The persistence handle
/// * `election_id` - The election identifier
///
/// # Errors
///
/// Returns `ResourceNotFound` if the election does not exist.
pub fn list_margin_parties(
    persistence: &mut Persistence,
    election_id: i64,
) -> Result<MarginPartiesResponse, ApiError> {
    let parties: Vec<PartyRef> = persistence
        .list_margin_parties(election_id)
        .map_err(translate_persistence_error)?;

    Ok(MarginPartiesResponse {
        election: election_id,
        parties,
    })
}

/// Builds the closest-margin report for one party in one election.
///
/// Winning margins are preferred; losing margins are returned only when the
/// party has no winner row at all — never a mix of both.
///
/// # Arguments
///
/// * `persistence` - The persistence handle
/// * `election_id` - The election identifier
/// * `party_id` - The party identifier
///
/// # Errors
///
/// Returns `ResourceNotFound` if the election or the party does not exist.
pub fn get_closest_margins(
    persistence: &mut Persistence,
    election_id: i64,
    party_id: i64,
) -> Result<ClosestMarginsResponse, ApiError> {
    let (party_name, outcome, people): (String, MarginOutcome, Vec<MarginEntry>) = persistence
        .get_closest_margins(election_id, party_id)
        .map_err(translate_persistence_error)?;

    Ok(ClosestMarginsResponse {
        election: election_id,
        closest: MarginReport {
            people,
            party_name,
            outcome,
        },
    })
}
