use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    Router,
    extract::{Json, Path, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::core::{Scenario, ScenarioInputs, ScenarioStore, YearlyPoint, project};

const INDEX_HTML: &str = include_str!("../../web/index.html");
const STYLES_CSS: &str = include_str!("../../web/styles.css");
const APP_JS: &str = include_str!("../../web/app.js");

type SharedStore = Arc<Mutex<ScenarioStore>>;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectPayload {
    initial_investment: Option<f64>,
    monthly_contribution: Option<f64>,
    #[serde(alias = "annualReturnPercent")]
    annual_return: Option<f64>,
    #[serde(alias = "inflationPercent", alias = "inflation")]
    inflation_rate: Option<f64>,
    years: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct AddScenarioPayload {
    name: Option<String>,
    #[serde(flatten)]
    inputs: ProjectPayload,
}

#[derive(Debug, Deserialize)]
struct VisibilityPayload {
    visible: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SharePayload {
    #[serde(alias = "token")]
    s: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectionResponse {
    inputs: ScenarioInputs,
    points: Vec<YearlyPoint>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScenarioListResponse {
    scenarios: Vec<Scenario>,
    share_token: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Form defaults, applied when a payload field is absent. Out-of-range
/// values are rejected before the engine runs.
pub fn build_inputs(payload: ProjectPayload) -> Result<ScenarioInputs, String> {
    let inputs = ScenarioInputs {
        initial_investment: payload.initial_investment.unwrap_or(10_000.0),
        monthly_contribution: payload.monthly_contribution.unwrap_or(0.0),
        annual_return_percent: payload.annual_return.unwrap_or(7.0),
        inflation_percent: payload.inflation_rate.unwrap_or(3.0),
        years: payload.years.unwrap_or(10),
    };
    inputs.validate()?;
    Ok(inputs)
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let store: SharedStore = Arc::new(Mutex::new(ScenarioStore::new()));
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/styles.css", get(styles_handler))
        .route("/app.js", get(app_js_handler))
        .route(
            "/api/project",
            get(project_get_handler).post(project_post_handler),
        )
        .route(
            "/api/scenarios",
            get(scenarios_get_handler)
                .post(scenarios_post_handler)
                .delete(scenarios_clear_handler),
        )
        .route("/api/scenarios/:id", delete(scenario_delete_handler))
        .route("/api/scenarios/:id/visibility", post(visibility_handler))
        .route("/api/share", post(share_handler))
        .fallback(not_found_handler)
        .with_state(store);

    let listener = TcpListener::bind(addr).await?;
    info!("compound growth calculator listening on http://{addr}");
    info!("local access: http://127.0.0.1:{port}/");

    axum::serve(listener, app).await
}

async fn index_handler() -> impl IntoResponse {
    with_cache_control(Html(INDEX_HTML))
}

async fn styles_handler() -> impl IntoResponse {
    with_cache_control((
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLES_CSS,
    ))
}

async fn app_js_handler() -> impl IntoResponse {
    with_cache_control((
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        APP_JS,
    ))
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn project_get_handler(Query(payload): Query<ProjectPayload>) -> Response {
    project_handler_impl(payload)
}

async fn project_post_handler(Json(payload): Json<ProjectPayload>) -> Response {
    project_handler_impl(payload)
}

fn project_handler_impl(payload: ProjectPayload) -> Response {
    let inputs = match build_inputs(payload) {
        Ok(inputs) => inputs,
        Err(msg) => {
            warn!("rejected projection payload: {msg}");
            return error_response(StatusCode::BAD_REQUEST, &msg);
        }
    };
    let points = project(&inputs);
    json_response(StatusCode::OK, ProjectionResponse { inputs, points })
}

async fn scenarios_get_handler(State(store): State<SharedStore>) -> Response {
    list_response(&lock(&store))
}

async fn scenarios_post_handler(
    State(store): State<SharedStore>,
    Json(payload): Json<AddScenarioPayload>,
) -> Response {
    let inputs = match build_inputs(payload.inputs) {
        Ok(inputs) => inputs,
        Err(msg) => {
            warn!("rejected scenario payload: {msg}");
            return error_response(StatusCode::BAD_REQUEST, &msg);
        }
    };
    let mut store = lock(&store);
    store.add(inputs, payload.name.as_deref().unwrap_or(""));
    list_response(&store)
}

async fn scenario_delete_handler(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Response {
    let mut store = lock(&store);
    if !store.remove(&id) {
        return error_response(StatusCode::NOT_FOUND, "No scenario with that id");
    }
    list_response(&store)
}

async fn scenarios_clear_handler(State(store): State<SharedStore>) -> Response {
    let mut store = lock(&store);
    store.clear();
    list_response(&store)
}

async fn visibility_handler(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    Json(payload): Json<VisibilityPayload>,
) -> Response {
    let mut store = lock(&store);
    if !store.set_visibility(&id, payload.visible) {
        return error_response(StatusCode::NOT_FOUND, "No scenario with that id");
    }
    list_response(&store)
}

async fn share_handler(State(store): State<SharedStore>, Json(payload): Json<SharePayload>) -> Response {
    let mut store = lock(&store);
    match store.load_share_token(&payload.s) {
        Ok(count) => {
            info!("loaded {count} scenario(s) from share token");
            list_response(&store)
        }
        Err(err) => {
            warn!("ignoring malformed share token: {err}");
            error_response(StatusCode::BAD_REQUEST, &format!("Invalid share token: {err}"))
        }
    }
}

fn lock(store: &SharedStore) -> MutexGuard<'_, ScenarioStore> {
    store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn list_response(store: &ScenarioStore) -> Response {
    json_response(
        StatusCode::OK,
        ScenarioListResponse {
            scenarios: store.scenarios().to_vec(),
            share_token: store.share_token(),
        },
    )
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}
