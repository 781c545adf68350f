use crate::directory::regions::{Country, REGION_DIRECTORY};
use crate::enrich::wikipedia::{EnrichedFact, Enricher};
use crate::resolve::resolver::{pick_random, resolve, RegionMatch};
use crate::service::var_service::get_bind_address;
use anyhow::Result;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

#[derive(Clone)]
pub struct AppState {
    pub enricher: Arc<Enricher>,
}

#[derive(Serialize)]
pub struct MatchResponse {
    pub state: &'static str,
    pub capital: &'static str,
}

impl From<RegionMatch> for MatchResponse {
    fn from(hit: RegionMatch) -> MatchResponse {
        MatchResponse {
            state: hit.region,
            capital: hit.capital,
        }
    }
}

/// One-call shape for widget front ends: the resolved pair plus its
/// enrichment, so they need a single round trip.
#[derive(Serialize)]
pub struct LookupResponse {
    pub state: &'static str,
    pub capital: &'static str,
    pub fact: String,
    pub wikipedia_summary: String,
    pub source: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

#[derive(Deserialize)]
pub struct CapitalQuery {
    pub country: Option<String>,
    pub state: Option<String>,
}

#[derive(Deserialize)]
pub struct RandomQuery {
    pub country: Option<String>,
}

#[derive(Deserialize)]
pub struct EnrichedQuery {
    pub capital: Option<String>,
}

pub async fn serve() -> Result<()> {
    let state = AppState {
        enricher: Arc::new(Enricher::new().await?),
    };
    let app = create_router(state);

    let addr = get_bind_address().await?;
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/capital", get(api_capital))
        .route("/api/random", get(api_random))
        .route("/api/enriched", get(api_enriched))
        .route("/api/lookup", get(api_lookup))
        .route("/api/health", get(health_check))
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Country keys arrive from the network, so they are validated here; the
/// resolver itself only ever sees the closed enum.
fn parse_country(key: Option<&str>) -> Result<Country, ApiError> {
    let key = key.unwrap_or("us");
    Country::from_key(key)
        .ok_or_else(|| api_error(StatusCode::BAD_REQUEST, "Unknown country key"))
}

async fn api_capital(Query(query): Query<CapitalQuery>) -> Result<Json<MatchResponse>, ApiError> {
    let country = parse_country(query.country.as_deref())?;
    let state = match query.state.as_deref() {
        Some(state) if !state.trim().is_empty() => state,
        _ => return Err(api_error(StatusCode::BAD_REQUEST, "Missing state parameter")),
    };

    match resolve(&REGION_DIRECTORY, state, country) {
        Some(hit) => Ok(Json(hit.into())),
        None => Err(api_error(StatusCode::NOT_FOUND, "Capital not found")),
    }
}

async fn api_random(Query(query): Query<RandomQuery>) -> Result<Json<MatchResponse>, ApiError> {
    let country = parse_country(query.country.as_deref())?;
    Ok(Json(pick_random(&REGION_DIRECTORY, country).into()))
}

async fn api_enriched(
    State(state): State<AppState>,
    Query(query): Query<EnrichedQuery>,
) -> Result<Json<EnrichedFact>, ApiError> {
    let capital = match query.capital.as_deref() {
        Some(capital) if !capital.trim().is_empty() => capital,
        _ => {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "Missing capital parameter",
            ))
        }
    };

    Ok(Json(state.enricher.enrich(capital).await))
}

async fn api_lookup(
    State(state): State<AppState>,
    Query(query): Query<CapitalQuery>,
) -> Result<Json<LookupResponse>, ApiError> {
    let country = parse_country(query.country.as_deref())?;
    let name = match query.state.as_deref() {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Err(api_error(StatusCode::BAD_REQUEST, "Missing state parameter")),
    };

    let hit = resolve(&REGION_DIRECTORY, name, country)
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "Capital not found"))?;
    let enriched = state.enricher.enrich(hit.capital).await;

    Ok(Json(LookupResponse {
        state: hit.region,
        capital: hit.capital,
        fact: enriched.fact,
        wikipedia_summary: enriched.wikipedia_summary,
        source: enriched.source,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_state() -> AppState {
        std::env::set_var("WIKIPEDIA_ENRICHMENT", "false");
        let cache_path = std::env::temp_dir().join(format!("capital_api_test_{}.sqlite", std::process::id()));
        std::env::set_var("CACHE_DB_PATH", cache_path.to_string_lossy().to_string());

        AppState {
            enricher: Arc::new(Enricher::new().await.unwrap()),
        }
    }

    #[tokio::test]
    async fn lookup_combines_match_and_enrichment() {
        let query = CapitalQuery {
            country: Some("us".to_string()),
            state: Some("cal".to_string()),
        };
        let Json(body) = api_lookup(State(test_state().await), Query(query)).await.unwrap();

        assert_eq!(body.state, "California");
        assert_eq!(body.capital, "Sacramento");
        assert_eq!(
            body.fact,
            "Sacramento started as a Gold Rush town and has a historic riverfront."
        );
        assert_eq!(body.source, "local");
        assert!(body.wikipedia_summary.is_empty());
    }

    #[tokio::test]
    async fn lookup_requires_state_parameter() {
        let query = CapitalQuery {
            country: None,
            state: None,
        };
        let (status, _) = api_lookup(State(test_state().await), Query(query))
            .await
            .err()
            .unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn lookup_reports_unmatched_state_as_not_found() {
        let query = CapitalQuery {
            country: Some("uk".to_string()),
            state: Some("zzzznotaregion".to_string()),
        };
        let (status, _) = api_lookup(State(test_state().await), Query(query))
            .await
            .err()
            .unwrap();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
