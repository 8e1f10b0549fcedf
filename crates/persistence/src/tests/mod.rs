// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.


use crate::Persistence;

/// Creates a fresh in-memory persistence instance.
pub fn create_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

/// Identifiers of the rows created by [`seed_basic`].
pub struct BasicSeed {
    pub election: i64,
    pub constituency: i64,
    pub cdu: i64,
    pub spd: i64,
    pub schmidt: i64,
    pub meyer: i64,
}

/// Seeds one election with a single decided constituency.
///
/// Election 2013, constituency "Berlin-Mitte", parties CDU and SPD,
/// candidates Anna Schmidt (CDU, winner, 12 000 first votes) and Bernd
/// Meyer (SPD, 8 000 first votes), second votes CDU 11 000 / SPD 9 000,
/// turnout 71.5.
pub fn seed_basic(persistence: &mut Persistence) -> BasicSeed {
    let election: i64 = persistence.insert_election(2013, "2013-09-22").unwrap();
    let constituency: i64 = persistence.insert_constituency("Berlin-Mitte").unwrap();
    let cdu: i64 = persistence.insert_party("CDU").unwrap();
    let spd: i64 = persistence.insert_party("SPD").unwrap();

    let schmidt: i64 = persistence.insert_candidate("Anna", "Schmidt").unwrap();
    let meyer: i64 = persistence.insert_candidate("Bernd", "Meyer").unwrap();

    persistence
        .insert_direct_candidacy(election, constituency, schmidt, Some(cdu))
        .unwrap();
    persistence
        .insert_direct_candidacy(election, constituency, meyer, Some(spd))
        .unwrap();
    persistence
        .insert_mandate_winner(election, constituency, schmidt, Some(cdu))
        .unwrap();

    persistence
        .insert_first_vote_result(election, constituency, schmidt, 12_000)
        .unwrap();
    persistence
        .insert_first_vote_result(election, constituency, meyer, 8_000)
        .unwrap();

    persistence
        .insert_second_vote_result(election, constituency, cdu, 11_000)
        .unwrap();
    persistence
        .insert_second_vote_result(election, constituency, spd, 9_000)
        .unwrap();

    persistence
        .insert_turnout_record(election, constituency, 71.5)
        .unwrap();

    BasicSeed {
        election,
        constituency,
        cdu,
        spd,
        schmidt,
        meyer,
    }
}
