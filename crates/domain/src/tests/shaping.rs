// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{PartyVotes, leading_party, vote_share};

fn party_votes(party_id: i64, name: &str, votes: i64) -> PartyVotes {
    PartyVotes {
        party_id,
        name: String::from(name),
        votes,
    }
}

#[test]
fn test_vote_share_rounds_to_one_decimal() {
    assert!((vote_share(1, 3) - 33.3).abs() < f64::EPSILON);
    assert!((vote_share(2, 3) - 66.7).abs() < f64::EPSILON);
    assert!((vote_share(1, 8) - 12.5).abs() < f64::EPSILON);
}

#[test]
fn test_vote_share_full_and_zero() {
    assert!((vote_share(40, 40) - 100.0).abs() < f64::EPSILON);
    assert!((vote_share(0, 40) - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_vote_share_with_empty_denominator() {
    assert!((vote_share(10, 0) - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_shares_sum_to_roughly_one_hundred() {
    let counts: [i64; 4] = [33_421, 28_977, 11_003, 7_644];
    let total: i64 = counts.iter().sum();

    let sum: f64 = counts.iter().map(|&c| vote_share(c, total)).sum();
    let tolerance: f64 = 0.1 * counts.len() as f64;
    assert!((sum - 100.0).abs() <= tolerance, "sum was {sum}");
}

#[test]
fn test_leading_party_picks_strict_maximum() {
    let rows: Vec<PartyVotes> = vec![
        party_votes(1, "CDU", 900),
        party_votes(2, "SPD", 1_200),
        party_votes(3, "FDP", 300),
    ];

    let leader: &PartyVotes = leading_party(&rows).unwrap();
    assert_eq!(leader.name, "SPD");
}

#[test]
fn test_leading_party_tie_collapses_to_lowest_id() {
    let rows: Vec<PartyVotes> = vec![
        party_votes(7, "SPD", 1_000),
        party_votes(2, "CDU", 1_000),
        party_votes(9, "FDP", 400),
    ];

    let leader: &PartyVotes = leading_party(&rows).unwrap();
    assert_eq!(leader.party_id, 2);
    assert_eq!(leader.name, "CDU");
}

#[test]
fn test_leading_party_of_empty_rows_is_none() {
    assert!(leading_party(&[]).is_none());
}
