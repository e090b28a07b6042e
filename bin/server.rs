// World Clock - Web Server
// JSON API over the clock engine: each request gets one freshly computed,
// filtered, grouped snapshot. The server holds no timer; clients poll at
// whatever cadence they want.

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use world_clock::{
    apply_search, compute_records, group_by_region, group_by_timezone, timezone_label, Catalog,
    DisplayRecord,
};

/// Shared application state
#[derive(Clone)]
struct AppState {
    world: Arc<Catalog>,
    states: Arc<Catalog>,
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }
}

/// Search query parameters
#[derive(Deserialize)]
struct SearchParams {
    q: Option<String>,
}

/// Grouped world-clock response
#[derive(Serialize)]
struct ClocksResponse {
    query: String,
    matches: usize,
    groups: Vec<RegionGroupResponse>,
}

#[derive(Serialize)]
struct RegionGroupResponse {
    region: String,
    count: usize,
    locations: Vec<DisplayRecord>,
}

/// States-grid response, sectioned by timezone
#[derive(Serialize)]
struct StatesResponse {
    query: String,
    matches: usize,
    sections: Vec<TimezoneSectionResponse>,
}

#[derive(Serialize)]
struct TimezoneSectionResponse {
    timezone: String,
    label: String,
    count: usize,
    locations: Vec<DisplayRecord>,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/clocks?q=... - World catalog, filtered and grouped by region
async fn get_clocks(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let query = params.q.unwrap_or_default();

    let records = compute_records(&state.world, Utc::now());
    let filtered = apply_search(&records, &query);
    let matches = filtered.len();

    let groups: Vec<RegionGroupResponse> = group_by_region(&filtered)
        .into_iter()
        .map(|(region, locations)| RegionGroupResponse {
            region: region.label().to_string(),
            count: locations.len(),
            locations,
        })
        .collect();

    // matches == 0 is the client's cue to render its empty state
    Json(ApiResponse::ok(ClocksResponse {
        query,
        matches,
        groups,
    }))
}

/// GET /api/states?q=... - States catalog, filtered and sectioned by timezone
async fn get_states(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let query = params.q.unwrap_or_default();

    let records = compute_records(&state.states, Utc::now());
    let filtered = apply_search(&records, &query);
    let matches = filtered.len();

    let sections: Vec<TimezoneSectionResponse> = group_by_timezone(&filtered)
        .into_iter()
        .map(|(timezone, locations)| TimezoneSectionResponse {
            label: timezone_label(&timezone).to_string(),
            count: locations.len(),
            timezone,
            locations,
        })
        .collect();

    Json(ApiResponse::ok(StatesResponse {
        query,
        matches,
        sections,
    }))
}

/// GET / - Landing page with endpoint listing
async fn serve_index() -> impl IntoResponse {
    Html(
        "<h1>World Clock API</h1>\
         <ul>\
           <li><a href=\"/api/clocks\">/api/clocks</a> - world cities grouped by region (filter with ?q=)</li>\
           <li><a href=\"/api/states\">/api/states</a> - US states sectioned by timezone (filter with ?q=)</li>\
           <li><a href=\"/api/health\">/api/health</a> - health check</li>\
         </ul>",
    )
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() {
    println!("🌐 World Clock - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // Catalogs are compiled in: nothing to open, nothing to fail
    let state = AppState {
        world: Arc::new(Catalog::world_locations()),
        states: Arc::new(Catalog::us_states()),
    };
    println!(
        "✓ Catalogs loaded: {} world locations, {} states",
        state.world.len(),
        state.states.len()
    );

    // Build API routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/clocks", get(get_clocks))
        .route("/states", get(get_states))
        .with_state(state.clone());

    // Build main router
    let app = Router::new()
        .route("/", get(serve_index))
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive());

    // Start server
    let addr = "0.0.0.0:3000";
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    println!("\n🚀 Server running on http://localhost:3000");
    println!("   API: http://localhost:3000/api/clocks");
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
