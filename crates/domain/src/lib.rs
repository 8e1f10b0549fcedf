// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod display;
mod reports;
mod shaping;

#[cfg(test)]
mod tests;

pub use display::{DisplayConfig, UnknownParty};
pub use reports::{
    CandidateResult, ConstituencyDetail, ConstituencySummary, ElectionInfo, MarginEntry,
    MarginOutcome, Member, PartyRef, PartyResult, SeatEntry, VoteSharePoint, VoteShareSeries,
};
pub use shaping::{PartyVotes, leading_party, vote_share};
