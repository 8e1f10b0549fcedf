// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Report record types.
//!
//! Every reporting operation produces one of the named-field records in this
//! module. Records are plain projections over the relational store; they carry
//! no behavior beyond construction and serialization.

use serde::{Deserialize, Serialize};
use time::Date;

/// A member of the Bundestag elected in a given election.
///
/// The constituency fields are populated exactly when the member won a
/// direct mandate; list-seat members carry `None` for both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// The member's first name.
    pub first_name: String,
    /// The member's last name.
    pub last_name: String,
    /// The name of the member's party.
    pub party: String,
    /// The federal state ("Bundesland") the member represents.
    pub federal_state: String,
    /// The constituency the member won directly, if any.
    pub constituency_id: Option<i64>,
    /// The name of that constituency, if any.
    pub constituency_name: Option<String>,
}

/// Per-constituency summary line for the constituency overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstituencySummary {
    /// The constituency identifier.
    pub constituency_id: i64,
    /// The constituency name.
    pub name: String,
    /// The party of the direct-mandate winner, if the winner ran for one.
    pub winner_party: Option<String>,
    /// The party leading the second-vote count in this constituency.
    ///
    /// "Leading" means no other party has strictly more votes; ties are
    /// collapsed to the party with the lowest identifier.
    pub leading_party: Option<String>,
}

/// One candidate's first-vote result within a constituency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateResult {
    /// The candidate's full name.
    pub name: String,
    /// The nominating party, `None` for independents.
    pub party: Option<String>,
    /// The first-vote count.
    pub votes: i64,
    /// Share of all first votes in this constituency and election,
    /// rounded to one decimal.
    pub percentage: f64,
}

/// One party's second-vote result within a constituency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyResult {
    /// The party name.
    pub party: String,
    /// The second-vote count.
    pub votes: i64,
    /// Share of all second votes in this constituency and election,
    /// rounded to one decimal.
    pub percentage: f64,
}

/// Full results for a single constituency in a single election.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstituencyDetail {
    /// The constituency identifier.
    pub constituency_id: i64,
    /// The constituency name.
    pub name: String,
    /// First name of the direct-mandate winner.
    pub winner_first_name: String,
    /// Last name of the direct-mandate winner.
    pub winner_last_name: String,
    /// Turnout percentage; `None` when not yet recorded.
    pub turnout: Option<f64>,
    /// First-vote results, ordered by vote count descending.
    pub candidates: Vec<CandidateResult>,
    /// Second-vote results, ordered by vote count descending.
    pub parties: Vec<PartyResult>,
}

/// A party's seat count in the Bundestag, with its display color resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatEntry {
    /// The party name.
    pub party: String,
    /// The number of seats allocated to the party.
    pub seats: i64,
    /// The display color from the injected color table.
    pub color: String,
}

/// One (party, share) data point of a vote-share series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteSharePoint {
    /// The party name.
    pub party: String,
    /// Nationwide second-vote share, rounded to one decimal.
    pub share: f64,
}

/// Per-election vote-share series for the historical trend chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteShareSeries {
    /// Position of this election in the requested election list.
    pub index: usize,
    /// The election year, used as the series label.
    pub name: u16,
    /// Data points restricted to the interesting-party allow-list,
    /// ordered by share descending.
    pub data: Vec<VoteSharePoint>,
}

/// A party selector entry for the closest-races pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyRef {
    /// The party identifier.
    pub party_id: i64,
    /// The party name.
    pub name: String,
}

/// Whether a margin report lists winning or losing margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarginOutcome {
    /// The party had at least one direct-mandate winner; the report lists
    /// its narrowest winning margins.
    Winners,
    /// The party had no direct-mandate winner; the report falls back to
    /// its narrowest losing margins.
    Losers,
}

impl MarginOutcome {
    /// Converts this outcome to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Winners => "winners",
            Self::Losers => "losers",
        }
    }
}

/// One closest-margin race entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginEntry {
    /// The candidate's first name.
    pub first_name: String,
    /// The candidate's last name.
    pub last_name: String,
    /// The constituency the race took place in.
    pub constituency_id: i64,
    /// The name of that constituency.
    pub constituency_name: String,
    /// Vote-count difference between the winner and the runner-up.
    pub margin: i64,
}

/// An imported election.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionInfo {
    /// The election identifier.
    pub election_id: i64,
    /// The election year.
    pub year: u16,
    /// The date the election was held.
    pub election_date: Date,
}
