//! Search preview routes

use crate::{
    error::Result,
    models::{ApiResponse, Filter, FilterQueryResponse, QueryResponse, SearchCommand},
    search::QueryParams,
    AppState,
};
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::info;

use super::health::handle_health;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handle_root))
        .route("/health", get(handle_health))
        .route("/search", get(handle_search))
        .route("/api/query", post(handle_query))
        .route("/api/fq", post(handle_fq))
}

async fn handle_root(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::success(serde_json::json!({
        "app": state.app_name,
        "version": state.version,
        "message": "Welcome to the Lucene Query Builder API!",
        "usage": {
            "search": {
                "description": "Build the CloudSearch command for a phrase.",
                "endpoint": "/search",
                "method": "GET",
                "parameters": {
                    "q": "The query phrase. E.g., 'apple'",
                    "otherParams": "Additional query filters in key-value pairs. E.g., type=fruit"
                },
                "example": "GET /search?q=apple&type=fruit"
            },
            "query": {
                "description": "Build a Lucene query from phrase, and, not, dates and options.",
                "endpoint": "/api/query",
                "method": "POST"
            },
            "fq": {
                "description": "Build a CloudSearch filter query from a list of filters.",
                "endpoint": "/api/fq",
                "method": "POST"
            }
        },
        "note": "Queries are built but never executed; forward them to your search domain."
    })))
}

/// `q` becomes the phrase; every other parameter is added as a single-value filter
/// after the configured default filter.
async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response> {
    let phrase = params
        .iter()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.as_str())
        .unwrap_or_default();

    if phrase.is_empty() {
        info!("GET /search - no phrase given");
        return Ok(Json(Vec::<SearchCommand>::new()).into_response());
    }

    let filters: Vec<Filter> = state
        .search
        .default_filter()
        .into_iter()
        .chain(
            params
                .iter()
                .filter(|(key, _)| key != "q")
                .map(|(key, value)| Filter::new().with(key.clone(), value.clone())),
        )
        .collect();

    info!("GET /search - phrase: {:?}, filters: {}", phrase, filters.len());

    let command = SearchCommand {
        query: state.builder.query(&QueryParams::new().with_phrase(phrase))?,
        query_parser: state.search.query_parser.clone(),
        return_fields: state.search.return_fields.clone(),
        filter_query: state.builder.fq(Some(filters.as_slice())),
    };

    Ok(Json(ApiResponse::success(command)).into_response())
}

async fn handle_query(
    State(state): State<AppState>,
    Json(params): Json<QueryParams>,
) -> Result<impl IntoResponse> {
    info!("POST /api/query - phrase: {:?}", params.phrase);

    let query = state.builder.query(&params)?;
    Ok(Json(ApiResponse::success(QueryResponse { query })))
}

async fn handle_fq(
    State(state): State<AppState>,
    Json(filters): Json<Option<Vec<Filter>>>,
) -> impl IntoResponse {
    info!(
        "POST /api/fq - filters: {}",
        filters.as_ref().map_or(0, Vec::len)
    );

    let fq = state.builder.fq(filters.as_deref());
    Json(ApiResponse::success(FilterQueryResponse { fq }))
}
