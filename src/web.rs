use std::collections::BTreeMap;

use actix_files::Files;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{middleware, web, App, HttpRequest, HttpResponse, HttpServer, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::allocation::{
    allocate_roster, conflict_seats, score, AffinityGroups, AffinityIndex, AllocationOutcome,
    Assignment, Member,
};
use crate::config::ServerConfig;

/// Shared, read-only server settings. Requests keep no state here.
pub struct AppState {
    pub max_per_team: usize,
    pub server_start_time: String,
}

impl AppState {
    pub fn new(max_per_team: usize) -> Self {
        Self {
            max_per_team,
            server_start_time: chrono::Utc::now().timestamp_millis().to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AllocateRequest {
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub groups: AffinityGroups,
}

#[derive(Serialize)]
pub struct AllocateResponse {
    success: bool,
    teams: Assignment,
    group_sizes: Vec<usize>,
    conflicts: usize,
    stats: AllocationStats,
    group_distributions: BTreeMap<String, Vec<usize>>,
}

#[derive(Serialize)]
pub struct AllocationStats {
    total_members: usize,
    total_teams: usize,
    group_constraints: usize,
    conflict_count: usize,
}

impl AllocateResponse {
    fn from_outcome(outcome: AllocationOutcome, group_count: usize) -> Self {
        let team_count = outcome.teams.len();
        let total_members = outcome.teams.iter().map(Vec::len).sum();
        let conflicts = outcome.report.conflict_count;

        Self {
            success: true,
            group_distributions: outcome.report.dense_distributions(team_count),
            teams: outcome.teams,
            group_sizes: outcome.capacities,
            conflicts,
            stats: AllocationStats {
                total_members,
                total_teams: team_count,
                group_constraints: group_count,
                conflict_count: conflicts,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub groups: AffinityGroups,
    pub teams: Assignment,
}

#[derive(Serialize)]
pub struct ScoreResponse {
    success: bool,
    conflicts: usize,
    group_distributions: BTreeMap<String, Vec<usize>>,
    conflict_seats: Vec<Vec<bool>>,
}

fn error_response(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({
        "success": false,
        "error": message.into(),
    }))
}

// Malformed bodies get the same `{success, error}` shape as rejected input
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, "rejected request body");
    let response = error_response(err.to_string());
    InternalError::from_response(err, response).into()
}

// Allocation endpoint
async fn allocate_seats(
    req: web::Json<AllocateRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let req = req.into_inner();
    if req.members.is_empty() {
        warn!("allocation requested with an empty roster");
        return Ok(error_response("No members provided"));
    }

    let mut rng = StdRng::from_entropy();
    match allocate_roster(&req.members, &req.groups, state.max_per_team, &mut rng) {
        Ok(outcome) => {
            info!(
                members = req.members.len(),
                teams = outcome.teams.len(),
                conflicts = outcome.report.conflict_count,
                "allocated seats"
            );
            Ok(HttpResponse::Ok().json(AllocateResponse::from_outcome(outcome, req.groups.len())))
        }
        Err(e) => {
            warn!(error = %e, "allocation rejected");
            Ok(error_response(e.to_string()))
        }
    }
}

// Re-scores an assignment, e.g. after manual seat edits
async fn score_assignment(req: web::Json<ScoreRequest>) -> Result<HttpResponse> {
    let req = req.into_inner();
    let index = AffinityIndex::build(&req.groups);
    let report = score(&req.groups, &req.teams);

    Ok(HttpResponse::Ok().json(ScoreResponse {
        success: true,
        conflicts: report.conflict_count,
        group_distributions: report.dense_distributions(req.teams.len()),
        conflict_seats: conflict_seats(&index, &req.teams),
    }))
}

// Runs the allocator over a fixed sample roster
async fn sample_allocation(state: web::Data<AppState>) -> Result<HttpResponse> {
    let members: Vec<Member> = (1..=23).map(|i| format!("Person{i}")).collect();
    let mut groups = AffinityGroups::new();
    groups.insert("GroupA".into(), person_range(1..=3));
    groups.insert("GroupB".into(), person_range(4..=6));
    groups.insert("GroupC".into(), person_range(7..=10));

    let mut rng = StdRng::from_entropy();
    match allocate_roster(&members, &groups, state.max_per_team, &mut rng) {
        Ok(outcome) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "test_result": {
                "members_count": members.len(),
                "teams": outcome.teams,
                "group_sizes": outcome.capacities,
                "conflicts": outcome.report.conflict_count,
                "groups": groups,
            }
        }))),
        Err(e) => Ok(error_response(e.to_string())),
    }
}

fn person_range(range: std::ops::RangeInclusive<usize>) -> Vec<Member> {
    range.map(|i| format!("Person{i}")).collect()
}

async fn health(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok()
        .insert_header(("X-Server-Start-Time", state.server_start_time.clone()))
        .json(serde_json::json!({
            "success": true,
            "message": "Seat allocation API server is running",
            "version": env!("CARGO_PKG_VERSION"),
            "server_start_time": state.server_start_time,
        })))
}

/// Registers the API routes; shared by the server and the HTTP tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/api/allocate", web::post().to(allocate_seats))
        .route("/api/score", web::post().to(score_assignment))
        .route("/api/test", web::get().to(sample_allocation))
        .route("/api/health", web::get().to(health));
}

pub async fn start_server(config: ServerConfig) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState::new(config.max_per_team));
    let static_dir = config.static_dir.clone();
    let serve_static = static_dir.is_dir();
    if !serve_static {
        info!(dir = %static_dir.display(), "static directory not found, serving the API only");
    }

    info!(host = %config.host, port = config.port, "starting web server");

    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure);
        if serve_static {
            app = app.service(Files::new("/", static_dir.clone()).index_file("index.html"));
        }
        app
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
