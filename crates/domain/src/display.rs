// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Display configuration for the reporting surface.
//!
//! The party color table and the interesting-party allow-list are injected
//! data, not literals inside query code, so they can be substituted in tests
//! and updated without touching the reporting operations.

use std::collections::HashMap;

use thiserror::Error;

/// A party name returned by the store has no entry in the color table.
///
/// This must propagate as a hard failure: it signals that the color table is
/// stale relative to the seat allocations in the store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Party '{party}' has no entry in the display color table")]
pub struct UnknownParty {
    /// The party name that failed to resolve.
    pub party: String,
}

/// Immutable display configuration.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Exact-match party name to display color mapping.
    party_colors: HashMap<String, String>,
    /// Parties shown in the historical vote-share trend.
    interesting_parties: Vec<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let party_colors: HashMap<String, String> = [
            ("CDU", "black"),
            ("CSU", "black"),
            ("SPD", "red"),
            ("FDP", "yellow"),
            ("GRÜNE", "green"),
            ("DIE LINKE", "purple"),
        ]
        .into_iter()
        .map(|(party, color)| (String::from(party), String::from(color)))
        .collect();

        let interesting_parties: Vec<String> =
            ["CDU", "FDP", "CSU", "SPD", "GRÜNE", "DIE LINKE", "AfD", "PIRATEN"]
                .into_iter()
                .map(String::from)
                .collect();

        Self {
            party_colors,
            interesting_parties,
        }
    }
}

impl DisplayConfig {
    /// Creates a display configuration from explicit tables.
    ///
    /// # Arguments
    ///
    /// * `party_colors` - Party name to display color pairs
    /// * `interesting_parties` - Parties shown in the vote-share trend
    #[must_use]
    pub fn new(
        party_colors: HashMap<String, String>,
        interesting_parties: Vec<String>,
    ) -> Self {
        Self {
            party_colors,
            interesting_parties,
        }
    }

    /// Resolves the display color for a party.
    ///
    /// # Arguments
    ///
    /// * `party` - The party name as stored (exact match, no normalization)
    ///
    /// # Errors
    ///
    /// Returns [`UnknownParty`] if the party has no color table entry.
    pub fn color_for(&self, party: &str) -> Result<&str, UnknownParty> {
        self.party_colors
            .get(party)
            .map(String::as_str)
            .ok_or_else(|| UnknownParty {
                party: party.to_string(),
            })
    }

    /// Returns whether a party appears in the vote-share trend.
    #[must_use]
    pub fn is_interesting(&self, party: &str) -> bool {
        self.interesting_parties.iter().any(|p| p == party)
    }
}
