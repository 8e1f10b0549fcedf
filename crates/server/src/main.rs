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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};
use wahlbericht_api::{
    ApiError, ClosestMarginsResponse, CompositionResponse, ConstituencyDetailResponse,
    ConstituencyOverviewResponse, ElectionsResponse, MarginPartiesResponse, MembersResponse,
    TrendResponse, get_closest_margins, get_composition, get_constituency_detail,
    get_constituency_overview, get_members, get_vote_share_trend, list_elections,
    list_margin_parties,
};
use wahlbericht_domain::{DisplayConfig, ElectionInfo};
use wahlbericht_persistence::{Persistence, PersistenceError};

/// Wahlbericht Server - HTTP frontend for the Bundestag reporting backend
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The persistence handle is wrapped in a Mutex to allow safe concurrent
/// access; the display configuration is immutable shared data.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for the pre-computed election results.
    persistence: Arc<Mutex<Persistence>>,
    /// The injected party color table and interesting-party allow-list.
    display: Arc<DisplayConfig>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::UnknownParty { .. } | ApiError::Internal { .. } => {
                error!(error = %err, "Reporting error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::ElectionNotFound(_)
            | PersistenceError::ConstituencyNotFound { .. }
            | PersistenceError::PartyNotFound(_)
            | PersistenceError::NotFound(_) => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            _ => {
                error!(error = %err, "Persistence error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: format!("Persistence error: {err}"),
                }
            }
        }
    }
}

/// Handler for GET `/elections` endpoint.
///
/// Lists all imported elections.
async fn handle_list_elections(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ElectionsResponse>, HttpError> {
    info!("Handling list_elections request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ElectionsResponse = list_elections(&mut persistence)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/elections/{election_id}/members` endpoint.
///
/// Lists the members elected in an election, ordered by last name.
async fn handle_get_members(
    AxumState(app_state): AxumState<AppState>,
    Path(election_id): Path<i64>,
) -> Result<Json<MembersResponse>, HttpError> {
    info!(election_id, "Handling members request");

    let mut persistence = app_state.persistence.lock().await;
    let response: MembersResponse = get_members(&mut persistence, election_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/elections/{election_id}/constituencies` endpoint.
///
/// Summarizes every constituency with a recorded direct-mandate winner.
async fn handle_get_constituency_overview(
    AxumState(app_state): AxumState<AppState>,
    Path(election_id): Path<i64>,
) -> Result<Json<ConstituencyOverviewResponse>, HttpError> {
    info!(election_id, "Handling constituency overview request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ConstituencyOverviewResponse =
        get_constituency_overview(&mut persistence, election_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/elections/{election_id}/constituencies/{constituency_id}` endpoint.
///
/// Returns the full result report for one constituency.
async fn handle_get_constituency_detail(
    AxumState(app_state): AxumState<AppState>,
    Path((election_id, constituency_id)): Path<(i64, i64)>,
) -> Result<Json<ConstituencyDetailResponse>, HttpError> {
    info!(
        election_id,
        constituency_id, "Handling constituency detail request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: ConstituencyDetailResponse =
        get_constituency_detail(&mut persistence, election_id, constituency_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/elections/{election_id}/composition` endpoint.
///
/// Returns the seat composition with resolved display colors.
async fn handle_get_composition(
    AxumState(app_state): AxumState<AppState>,
    Path(election_id): Path<i64>,
) -> Result<Json<CompositionResponse>, HttpError> {
    info!(election_id, "Handling composition request");

    let mut persistence = app_state.persistence.lock().await;
    let response: CompositionResponse =
        get_composition(&mut persistence, &app_state.display, election_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/elections/{election_id}/percentages` endpoint.
///
/// Charts the vote-share trend across every imported election up to and
/// including the addressed one, oldest first. The election list is derived
/// here and passed to the API explicitly; series indices follow the list.
async fn handle_get_vote_share_trend(
    AxumState(app_state): AxumState<AppState>,
    Path(election_id): Path<i64>,
) -> Result<Json<TrendResponse>, HttpError> {
    info!(election_id, "Handling vote share trend request");

    let mut persistence = app_state.persistence.lock().await;
    let target_year: u16 = persistence.lookup_election_year(election_id)?;
    let elections: Vec<i64> = persistence
        .list_elections()?
        .into_iter()
        .filter(|election: &ElectionInfo| election.year <= target_year)
        .map(|election| election.election_id)
        .collect();

    let response: TrendResponse =
        get_vote_share_trend(&mut persistence, &app_state.display, &elections)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/elections/{election_id}/closest` endpoint.
///
/// Lists the parties selectable on the closest-races pages.
async fn handle_list_margin_parties(
    AxumState(app_state): AxumState<AppState>,
    Path(election_id): Path<i64>,
) -> Result<Json<MarginPartiesResponse>, HttpError> {
    info!(election_id, "Handling margin party list request");

    let mut persistence = app_state.persistence.lock().await;
    let response: MarginPartiesResponse = list_margin_parties(&mut persistence, election_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/elections/{election_id}/closest/{party_id}` endpoint.
///
/// Returns the closest-margin report for one party.
async fn handle_get_closest_margins(
    AxumState(app_state): AxumState<AppState>,
    Path((election_id, party_id)): Path<(i64, i64)>,
) -> Result<Json<ClosestMarginsResponse>, HttpError> {
    info!(election_id, party_id, "Handling closest margins request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ClosestMarginsResponse =
        get_closest_margins(&mut persistence, election_id, party_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Builds the application router with all reporting endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/elections", get(handle_list_elections))
        .route("/elections/{election_id}/members", get(handle_get_members))
        .route(
            "/elections/{election_id}/constituencies",
            get(handle_get_constituency_overview),
        )
        .route(
            "/elections/{election_id}/constituencies/{constituency_id}",
            get(handle_get_constituency_detail),
        )
        .route(
            "/elections/{election_id}/composition",
            get(handle_get_composition),
        )
        .route(
            "/elections/{election_id}/percentages",
            get(handle_get_vote_share_trend),
        )
        .route(
            "/elections/{election_id}/closest",
            get(handle_list_margin_parties),
        )
        .route(
            "/elections/{election_id}/closest/{party_id}",
            get(handle_get_closest_margins),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Wahlbericht Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        display: Arc::new(DisplayConfig::default()),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use tower::ServiceExt;

    /// Helper to create test app state with in-memory persistence.
    fn create_test_app_state() -> AppState {
        let persistence: Persistence =
            Persistence::new_in_memory().expect("Failed to create in-memory persistence");
        AppState {
            persistence: Arc::new(Mutex::new(persistence)),
            display: Arc::new(DisplayConfig::default()),
        }
    }

    /// Identifiers of the rows created by `seed_decided_election`.
    struct DecidedElection {
        election: i64,
        constituency: i64,
        cdu: i64,
        spd: i64,
    }

    /// Seeds one election with a single decided constituency.
    async fn seed_decided_election(app_state: &AppState) -> DecidedElection {
        let mut persistence = app_state.persistence.lock().await;

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

        DecidedElection {
            election,
            constituency,
            cdu,
            spd,
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(app: Router, uri: &str) -> T {
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn get_status(app: Router, uri: &str) -> HttpStatusCode {
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        response.status()
    }

    #[tokio::test]
    async fn test_list_elections_endpoint() {
        let app_state: AppState = create_test_app_state();
        let seed: DecidedElection = seed_decided_election(&app_state).await;
        let app: Router = build_router(app_state);

        let response: ElectionsResponse = get_json(app, "/elections").await;

        assert_eq!(response.elections.len(), 1);
        assert_eq!(response.elections[0].election_id, seed.election);
        assert_eq!(response.elections[0].year, 2013);
    }

    #[tokio::test]
    async fn test_members_endpoint() {
        let app_state: AppState = create_test_app_state();
        let seed: DecidedElection = seed_decided_election(&app_state).await;
        {
            let mut persistence = app_state.persistence.lock().await;
            persistence
                .insert_member(seed.election, None, "Clara", "Zimmermann", "SPD", "Berlin")
                .unwrap();
            persistence
                .insert_member(seed.election, None, "Dieter", "Albrecht", "CDU", "Bayern")
                .unwrap();
        }
        let app: Router = build_router(app_state);

        let response: MembersResponse =
            get_json(app, &format!("/elections/{}/members", seed.election)).await;

        assert_eq!(response.members.len(), 2);
        assert_eq!(response.members[0].last_name, "Albrecht");
        assert_eq!(response.members[1].last_name, "Zimmermann");
    }

    #[tokio::test]
    async fn test_members_unknown_election_returns_not_found() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let status: HttpStatusCode = get_status(app, "/elections/42/members").await;
        assert_eq!(status, HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_constituency_overview_endpoint() {
        let app_state: AppState = create_test_app_state();
        let seed: DecidedElection = seed_decided_election(&app_state).await;
        let app: Router = build_router(app_state);

        let response: ConstituencyOverviewResponse =
            get_json(app, &format!("/elections/{}/constituencies", seed.election)).await;

        assert_eq!(response.wahlkreise.len(), 1);
        assert_eq!(response.wahlkreise[0].constituency_id, seed.constituency);
        assert_eq!(response.wahlkreise[0].winner_party.as_deref(), Some("CDU"));
        assert_eq!(response.wahlkreise[0].leading_party.as_deref(), Some("CDU"));
    }

    #[tokio::test]
    async fn test_constituency_detail_endpoint() {
        let app_state: AppState = create_test_app_state();
        let seed: DecidedElection = seed_decided_election(&app_state).await;
        let app: Router = build_router(app_state);

        let response: ConstituencyDetailResponse = get_json(
            app,
            &format!(
                "/elections/{}/constituencies/{}",
                seed.election, seed.constituency
            ),
        )
        .await;

        assert_eq!(response.details.winner_first_name, "Anna");
        assert_eq!(response.details.winner_last_name, "Schmidt");
        assert_eq!(response.details.turnout, Some(71.5));
        assert_eq!(response.details.candidates.len(), 2);
        assert!((response.details.candidates[0].percentage - 60.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_constituency_detail_without_winner_returns_not_found() {
        let app_state: AppState = create_test_app_state();
        let seed: DecidedElection = seed_decided_election(&app_state).await;
        let undecided: i64 = {
            let mut persistence = app_state.persistence.lock().await;
            persistence.insert_constituency("Hagen").unwrap()
        };
        let app: Router = build_router(app_state);

        let status: HttpStatusCode = get_status(
            app,
            &format!("/elections/{}/constituencies/{undecided}", seed.election),
        )
        .await;
        assert_eq!(status, HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_composition_endpoint() {
        let app_state: AppState = create_test_app_state();
        let seed: DecidedElection = seed_decided_election(&app_state).await;
        {
            let mut persistence = app_state.persistence.lock().await;
            persistence
                .insert_seat_allocation(seed.election, seed.spd, 193)
                .unwrap();
            persistence
                .insert_seat_allocation(seed.election, seed.cdu, 255)
                .unwrap();
        }
        let app: Router = build_router(app_state);

        let response: CompositionResponse =
            get_json(app, &format!("/elections/{}/composition", seed.election)).await;

        assert_eq!(response.parties.len(), 2);
        assert_eq!(response.parties[0].party, "CDU");
        assert_eq!(response.parties[0].color, "black");
    }

    #[tokio::test]
    async fn test_composition_unknown_party_returns_server_error() {
        let app_state: AppState = create_test_app_state();
        let seed: DecidedElection = seed_decided_election(&app_state).await;
        {
            let mut persistence = app_state.persistence.lock().await;
            let piraten: i64 = persistence.insert_party("PIRATEN").unwrap();
            persistence
                .insert_seat_allocation(seed.election, piraten, 3)
                .unwrap();
        }
        let app: Router = build_router(app_state);

        let status: HttpStatusCode =
            get_status(app, &format!("/elections/{}/composition", seed.election)).await;
        assert_eq!(status, HttpStatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_percentages_endpoint_derives_election_list() {
        let app_state: AppState = create_test_app_state();
        let seed: DecidedElection = seed_decided_election(&app_state).await;
        {
            let mut persistence = app_state.persistence.lock().await;
            let earlier: i64 = persistence.insert_election(2009, "2009-09-27").unwrap();
            persistence
                .insert_second_vote_result(earlier, seed.constituency, seed.cdu, 10_000)
                .unwrap();
            persistence
                .insert_second_vote_result(earlier, seed.constituency, seed.spd, 10_000)
                .unwrap();
        }
        let app: Router = build_router(app_state);

        let response: TrendResponse =
            get_json(app, &format!("/elections/{}/percentages", seed.election)).await;

        // Both imported elections fall at or before 2013, oldest first.
        assert_eq!(response.bar_series.len(), 2);
        assert_eq!(response.bar_series[0].index, 0);
        assert_eq!(response.bar_series[0].name, 2009);
        assert_eq!(response.bar_series[1].index, 1);
        assert_eq!(response.bar_series[1].name, 2013);
        assert!((response.bar_series[1].data[0].share - 55.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_closest_party_selector_endpoint() {
        let app_state: AppState = create_test_app_state();
        let seed: DecidedElection = seed_decided_election(&app_state).await;
        let app: Router = build_router(app_state);

        let response: MarginPartiesResponse =
            get_json(app, &format!("/elections/{}/closest", seed.election)).await;

        assert_eq!(response.parties.len(), 2);
        assert_eq!(response.parties[0].name, "CDU");
    }

    #[tokio::test]
    async fn test_closest_margins_endpoint() {
        let app_state: AppState = create_test_app_state();
        let seed: DecidedElection = seed_decided_election(&app_state).await;
        {
            let mut persistence = app_state.persistence.lock().await;
            persistence
                .insert_closest_winner(
                    seed.election,
                    seed.cdu,
                    "Anna",
                    "Schmidt",
                    seed.constituency,
                    "Berlin-Mitte",
                    412,
                )
                .unwrap();
        }
        let app: Router = build_router(app_state);

        let response: ClosestMarginsResponse = get_json(
            app,
            &format!("/elections/{}/closest/{}", seed.election, seed.cdu),
        )
        .await;

        assert_eq!(response.closest.party_name, "CDU");
        assert_eq!(response.closest.people.len(), 1);
        assert_eq!(response.closest.people[0].margin, 412);
    }

    #[tokio::test]
    async fn test_closest_margins_unknown_party_returns_not_found() {
        let app_state: AppState = create_test_app_state();
        let seed: DecidedElection = seed_decided_election(&app_state).await;
        let app: Router = build_router(app_state);

        let status: HttpStatusCode =
            get_status(app, &format!("/elections/{}/closest/999", seed.election)).await;
        assert_eq!(status, HttpStatusCode::NOT_FOUND);
    }
}
