//! Questionnaire HTTP Routes
//!
//! Every questionnaire URL is self-contained: the answers travel in the
//! query string and handlers keep no per-user state. An inconsistent URL is
//! answered with a 307 to the corrected one.
//!
//! Mounted under the route prefix:
//! - `/:category/start` - redirect to step 1
//! - `/:category/profile` - question page
//! - `/:category/resolve` - explanation
//! - `/:category/result` - explanation with product, recorded in history
//! - `/history` - recorded picks, newest first
//! - `/wiki/:category` - outcome catalog

use std::sync::Arc;

use axum::{
    extract::{Path, Query, RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::errors::HttpResult;
use super::state::AppState;
use crate::catalog::{product_for, ProductPick};
use crate::category::{self, CategoryConfig, CategoryKey, Ingredient};
use crate::content::Explanation;
use crate::flow::{self, Navigation, PageRequest};
use crate::history::PickEntry;
use crate::sequencer::Location;
use crate::signals::{AnswerSet, RawSignals};

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct ResolutionResponse {
    #[serde(flatten)]
    pub explanation: Explanation,
    pub result_href: String,
    pub wiki_href: String,
}

#[derive(Debug, Serialize)]
pub struct ResultResponse {
    #[serde(flatten)]
    pub resolution: ResolutionResponse,
    pub product: ProductPick,
    /// Whether this request added the pick to history
    pub recorded: bool,
}

#[derive(Debug, Serialize)]
pub struct CategorySummary {
    pub key: CategoryKey,
    pub label: &'static str,
    pub steps: usize,
    pub outcomes: Vec<&'static str>,
    pub start_href: String,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategorySummary>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub entries: Vec<PickEntry>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct WikiQuery {
    #[serde(default)]
    pub focus: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WikiEntry {
    pub key: &'static str,
    pub title: &'static str,
    pub category_label: &'static str,
    pub marketing: &'static str,
    pub fit_rule: &'static str,
    pub why_recommend: &'static str,
    pub not_for: &'static [&'static str],
    pub usage: &'static str,
    pub ingredients: &'static [Ingredient],
    pub focused: bool,
}

#[derive(Debug, Serialize)]
pub struct WikiResponse {
    pub category: CategoryKey,
    pub category_name: &'static str,
    /// Echoed only when it names an outcome of the category
    pub focus: Option<&'static str>,
    pub outcomes: Vec<WikiEntry>,
    pub start_href: String,
}

// ==================
// Routers
// ==================

/// Routes mounted under the route prefix.
pub fn questionnaire_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/:category/start", get(start_handler))
        .route("/:category/profile", get(profile_handler))
        .route("/:category/resolve", get(resolve_handler))
        .route("/:category/result", get(result_handler))
        .route("/history", get(history_handler).delete(clear_history_handler))
        .route("/wiki/:category", get(wiki_handler))
}

/// Category index, mounted at the root.
pub fn category_index_routes() -> Router<Arc<AppState>> {
    Router::new().route("/categories", get(categories_handler))
}

// ==================
// Handlers
// ==================

fn category_config(state: &AppState, segment: &str) -> HttpResult<&'static CategoryConfig> {
    category::lookup(segment).map_err(|err| {
        flow::observe_unknown_category(&state.metrics, segment);
        err.into()
    })
}

fn raw_signals(query: Option<String>) -> RawSignals {
    RawSignals::from_query(query.as_deref().unwrap_or(""))
}

fn start_href(config: &CategoryConfig, prefix: &str) -> String {
    Location::question(config, AnswerSet::new(), 1).href(prefix)
}

fn resolution_response(explanation: Explanation, prefix: &str) -> ResolutionResponse {
    ResolutionResponse {
        result_href: explanation.result_href(prefix),
        wiki_href: explanation.wiki_href(prefix),
        explanation,
    }
}

/// Navigates and observes; `Ok(Err(..))` is a response that is already final.
fn navigate(
    state: &AppState,
    config: &CategoryConfig,
    query: Option<String>,
    page: PageRequest,
) -> HttpResult<Result<Explanation, Response>> {
    let navigation = flow::navigate(config, &raw_signals(query), page, &state.prefix)?;
    flow::observe(&state.metrics, config.key, &navigation);

    Ok(match navigation {
        Navigation::Resolved(explanation) => Ok(explanation),
        Navigation::Redirect(location) => {
            Err(Redirect::temporary(&location.href(&state.prefix)).into_response())
        }
        Navigation::Question(view) => Err((StatusCode::OK, Json(view)).into_response()),
    })
}

async fn start_handler(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> HttpResult<Redirect> {
    let config = category_config(&state, &category)?;
    Ok(Redirect::temporary(&start_href(config, &state.prefix)))
}

async fn profile_handler(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
    RawQuery(query): RawQuery,
) -> HttpResult<Response> {
    let config = category_config(&state, &category)?;
    match navigate(&state, config, query, PageRequest::Question)? {
        Ok(explanation) => {
            Ok(Json(resolution_response(explanation, &state.prefix)).into_response())
        }
        Err(response) => Ok(response),
    }
}

async fn resolve_handler(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
    RawQuery(query): RawQuery,
) -> HttpResult<Response> {
    let config = category_config(&state, &category)?;
    match navigate(&state, config, query, PageRequest::Resolution)? {
        Ok(explanation) => {
            Ok(Json(resolution_response(explanation, &state.prefix)).into_response())
        }
        Err(response) => Ok(response),
    }
}

async fn result_handler(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
    RawQuery(query): RawQuery,
) -> HttpResult<Response> {
    let config = category_config(&state, &category)?;
    let explanation = match navigate(&state, config, query, PageRequest::Resolution)? {
        Ok(explanation) => explanation,
        Err(response) => return Ok(response),
    };

    let product = product_for(config, state.catalog.as_ref(), &explanation);
    flow::observe_product(&state.metrics, config.key, &product);
    let recorded = record_in_background(&state, &explanation).await;

    let response = ResultResponse {
        resolution: resolution_response(explanation, &state.prefix),
        product,
        recorded,
    };
    Ok(Json(response).into_response())
}

/// Records the pick off the async workers; the file log syncs to disk.
async fn record_in_background(state: &AppState, explanation: &Explanation) -> bool {
    let history = Arc::clone(&state.history);
    let metrics = Arc::clone(&state.metrics);
    let prefix = state.prefix.clone();
    let explanation = explanation.clone();

    tokio::task::spawn_blocking(move || {
        flow::record_pick(history.as_ref(), &metrics, &explanation, &prefix)
    })
    .await
    .unwrap_or(false)
}

async fn history_handler(State(state): State<Arc<AppState>>) -> HttpResult<Json<HistoryResponse>> {
    let entries = state.history.entries()?;
    Ok(Json(HistoryResponse {
        total: entries.len(),
        entries,
    }))
}

async fn clear_history_handler(State(state): State<Arc<AppState>>) -> HttpResult<StatusCode> {
    state.history.clear()?;
    Ok(StatusCode::NO_CONTENT)
}

async fn wiki_handler(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
    Query(query): Query<WikiQuery>,
) -> HttpResult<Json<WikiResponse>> {
    let config = category_config(&state, &category)?;
    let focus = query
        .focus
        .as_deref()
        .and_then(|f| config.outcome(f))
        .map(|bundle| bundle.key);

    let outcomes = config
        .outcomes
        .iter()
        .map(|bundle| WikiEntry {
            key: bundle.key,
            title: bundle.title,
            category_label: bundle.category_label,
            marketing: bundle.marketing,
            fit_rule: bundle.fit_rule,
            why_recommend: bundle.why_recommend,
            not_for: bundle.not_for,
            usage: bundle.usage,
            ingredients: bundle.ingredients,
            focused: focus == Some(bundle.key),
        })
        .collect();

    Ok(Json(WikiResponse {
        category: config.key,
        category_name: config.label,
        focus,
        outcomes,
        start_href: start_href(config, &state.prefix),
    }))
}

async fn categories_handler(State(state): State<Arc<AppState>>) -> Json<CategoriesResponse> {
    let categories: Vec<_> = category::all()
        .map(|config| CategorySummary {
            key: config.key,
            label: config.label,
            steps: config.step_count(),
            outcomes: config.outcomes.iter().map(|o| o.key).collect(),
            start_href: start_href(config, &state.prefix),
        })
        .collect();

    Json(CategoriesResponse {
        total: categories.len(),
        categories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_href_is_step_one() {
        let config = category::config(CategoryKey::Lotion);
        assert_eq!(start_href(config, "/m"), "/m/lotion/profile?step=1");
    }

    #[test]
    fn test_resolution_response_is_flat() {
        let config = category::config(CategoryKey::BodyWash);
        let explanation =
            flow::explain(config, &RawSignals::from_query("q1=B&q2=A")).unwrap();
        let json = serde_json::to_value(resolution_response(explanation, "/m")).unwrap();

        assert_eq!(json["outcome"], "rescue-soothing");
        assert_eq!(json["result_href"], "/m/bodywash/result?q1=B&q2=A");
        assert_eq!(json["wiki_href"], "/m/wiki/bodywash?focus=rescue-soothing");
    }
}
