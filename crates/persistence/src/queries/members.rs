// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bundestag member roster queries.
//!
//! All queries are generated in backend-specific monomorphic versions
//! (`_sqlite` and `_mysql` suffixes) using the `backend_fn!` macro.

use diesel::prelude::*;
#[cfg(feature = "mysql")]
use diesel::MysqlConnection;
use diesel::SqliteConnection;
use wahlbericht_domain::Member;

use crate::diesel_schema::{constituencies, mandate_winners, members};
use crate::error::PersistenceError;

backend_fn! {
/// Lists the members elected in an election, ordered by last name.
///
/// The roster is left-joined onto the direct-mandate winners on the
/// member's candidate id and election: members who won a direct mandate
/// carry their constituency id and name, list-seat members carry `None`
/// for both. An empty roster is valid for an election whose members have
/// not been imported yet; the caller is responsible for checking that the
/// election itself exists.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `election_id` - The election identifier
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn get_members(conn: &mut _, election_id: i64) -> Result<Vec<Member>, PersistenceError> {
    type MemberRowTuple = (
        String,
        String,
        String,
        String,
        Option<i64>,
        Option<String>,
    );

    let rows: Vec<MemberRowTuple> = members::table
        .left_join(
            mandate_winners::table.on(mandate_winners::candidate_id
                .nullable()
                .eq(members::candidate_id)
                .and(
                    mandate_winners::election_id
                        .nullable()
                        .eq(members::election_id.nullable()),
                )),
        )
        .left_join(
            constituencies::table.on(constituencies::constituency_id
                .nullable()
                .eq(mandate_winners::constituency_id.nullable())),
        )
        .filter(members::election_id.eq(election_id))
        .order(members::last_name.asc())
        .select((
            members::first_name,
            members::last_name,
            members::party_name,
            members::federal_state,
            mandate_winners::constituency_id.nullable(),
            constituencies::name.nullable(),
        ))
        .load::<MemberRowTuple>(conn)?;

    let members_list: Vec<Member> = rows
        .into_iter()
        .map(
            |(first_name, last_name, party, federal_state, constituency_id, constituency_name)| {
                Member {
                    first_name,
                    last_name,
                    party,
                    federal_state,
                    constituency_id,
                    constituency_name,
                }
            },
        )
        .collect();

    Ok(members_list)
}
}
