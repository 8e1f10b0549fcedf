// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API response data transfer objects.
//!
//! Field names match the keys the presentation layer consumes (`members`,
//! `wahlkreise`, `details`, `parties`, `bar_series`, `closest`).

use serde::{Deserialize, Serialize};
use wahlbericht_domain::{
    ConstituencyDetail, ConstituencySummary, ElectionInfo, MarginEntry, MarginOutcome, Member,
    PartyRef, SeatEntry, VoteShareSeries,
};

/// API response for the member roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembersResponse {
    /// The election the roster belongs to.
    pub election: i64,
    /// The members, ordered by last name.
    pub members: Vec<Member>,
}

/// API response for the constituency overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstituencyOverviewResponse {
    /// The election the overview belongs to.
    pub election: i64,
    /// One summary per constituency with a recorded winner, ordered by id.
    pub wahlkreise: Vec<ConstituencySummary>,
}

/// API response for a single constituency's results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstituencyDetailResponse {
    /// The election the report belongs to.
    pub election: i64,
    /// The full constituency report.
    pub details: ConstituencyDetail,
}

/// API response for the seat composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionResponse {
    /// The election the composition belongs to.
    pub election: i64,
    /// Seat entries with resolved display colors, largest party first.
    pub parties: Vec<SeatEntry>,
}

/// API response for the historical vote-share trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResponse {
    /// One series per requested election, in request order.
    pub bar_series: Vec<VoteShareSeries>,
}

/// API response for the closest-races party selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginPartiesResponse {
    /// The election the selector belongs to.
    pub election: i64,
    /// The selectable parties, ordered by name.
    pub parties: Vec<PartyRef>,
}

/// The closest-margin report for one party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginReport {
    /// Up to ten margin entries, narrowest first.
    pub people: Vec<MarginEntry>,
    /// The party's display name.
    pub party_name: String,
    /// Whether the entries are winning or losing margins.
    pub outcome: MarginOutcome,
}

/// API response for the closest-margin report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosestMarginsResponse {
    /// The election the report belongs to.
    pub election: i64,
    /// The margin report.
    pub closest: MarginReport,
}

/// API response for the election catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionsResponse {
    /// All imported elections, oldest first.
    pub elections: Vec<ElectionInfo>,
}
