use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::Config;
use crate::conversion::{self, ConversionError};
use crate::embed::{format_embed, EmbedError};
use crate::i18n::{self, Translations};
use crate::quantity::QuantityKind;
use crate::reference::ReferenceCar;

/// 라우터 전체가 공유하는 읽기 전용 상태. 시작 시 한 번 만든다.
#[derive(Debug, Clone)]
pub struct AppState {
    pub car: ReferenceCar,
    pub locale_dir: PathBuf,
    pub static_dir: PathBuf,
    pub default_language: String,
}

impl AppState {
    /// 설정으로부터 상태를 구성한다.
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            car: ReferenceCar::fabia(),
            locale_dir: PathBuf::from(&cfg.locale_dir),
            static_dir: PathBuf::from(&cfg.static_dir),
            default_language: cfg.default_language.clone(),
        }
    }

    fn translations(&self, lang: &str) -> Translations {
        i18n::load_translations(&self.locale_dir, lang)
    }
}

/// HTTP 응답으로 매핑되는 오류. 본문은 {"detail": "..."} JSON이다.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    fn internal(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

impl From<ConversionError> for ApiError {
    fn from(value: ConversionError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            detail: value.to_string(),
        }
    }
}

impl From<EmbedError> for ApiError {
    fn from(value: EmbedError) -> Self {
        ApiError::internal(value.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct UnitQuery {
    unit: String,
}

#[derive(Debug, Deserialize)]
struct AreaQuery {
    unit: String,
    scenario: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EmbedQuery {
    value: f64,
    conversion_type: String,
    unit: String,
    scenario: Option<String>,
    lng: Option<String>,
    explanation: Option<String>,
}

/// /convert/* 응답 본문.
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub fabia_units: f64,
    pub message: String,
}

/// Accept-Language 헤더로 결정한 언어의 성공 메시지를 붙여 응답을 만든다.
fn respond(
    state: &AppState,
    headers: &HeaderMap,
    kind: QuantityKind,
    fabia_units: f64,
) -> Json<ConvertResponse> {
    let lang = i18n::resolve_language(
        headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok()),
    );
    let tr = state.translations(&lang);
    Json(ConvertResponse {
        fabia_units,
        message: tr.message_for(kind),
    })
}

async fn convert_mass(
    State(state): State<Arc<AppState>>,
    Path(mass): Path<f64>,
    Query(q): Query<UnitQuery>,
    headers: HeaderMap,
) -> Result<Json<ConvertResponse>, ApiError> {
    let fabia_units = conversion::mass_to_fabia_units(&state.car, mass, &q.unit)?;
    Ok(respond(&state, &headers, QuantityKind::Mass, fabia_units))
}

async fn convert_length(
    State(state): State<Arc<AppState>>,
    Path(length): Path<f64>,
    Query(q): Query<UnitQuery>,
    headers: HeaderMap,
) -> Result<Json<ConvertResponse>, ApiError> {
    let fabia_units = conversion::length_to_fabia_units(&state.car, length, &q.unit)?;
    Ok(respond(&state, &headers, QuantityKind::Length, fabia_units))
}

async fn convert_width(
    State(state): State<Arc<AppState>>,
    Path(width): Path<f64>,
    Query(q): Query<UnitQuery>,
    headers: HeaderMap,
) -> Result<Json<ConvertResponse>, ApiError> {
    let fabia_units = conversion::width_to_fabia_units(&state.car, width, &q.unit)?;
    Ok(respond(&state, &headers, QuantityKind::Width, fabia_units))
}

async fn convert_height(
    State(state): State<Arc<AppState>>,
    Path(height): Path<f64>,
    Query(q): Query<UnitQuery>,
    headers: HeaderMap,
) -> Result<Json<ConvertResponse>, ApiError> {
    let fabia_units = conversion::height_to_fabia_units(&state.car, height, &q.unit)?;
    Ok(respond(&state, &headers, QuantityKind::Height, fabia_units))
}

async fn convert_area(
    State(state): State<Arc<AppState>>,
    Path(area): Path<f64>,
    Query(q): Query<AreaQuery>,
    headers: HeaderMap,
) -> Result<Json<ConvertResponse>, ApiError> {
    let scenario = q
        .scenario
        .as_deref()
        .map(conversion::parse_scenario)
        .transpose()?
        .unwrap_or_default();
    let fabia_units = conversion::area_to_fabia_units(&state.car, area, &q.unit, scenario)?;
    Ok(respond(&state, &headers, QuantityKind::Area, fabia_units))
}

async fn convert_power(
    State(state): State<Arc<AppState>>,
    Path(power): Path<f64>,
    Query(q): Query<UnitQuery>,
    headers: HeaderMap,
) -> Result<Json<ConvertResponse>, ApiError> {
    let fabia_units = conversion::power_to_fabia_units(&state.car, power, &q.unit)?;
    Ok(respond(&state, &headers, QuantityKind::Power, fabia_units))
}

/// embed용 HTML 조각을 만든다. 변환은 같은 프로세스 안에서 직접 호출한다.
async fn embed(
    State(state): State<Arc<AppState>>,
    Query(q): Query<EmbedQuery>,
) -> Result<Html<String>, ApiError> {
    let kind = conversion::parse_quantity_kind(&q.conversion_type)?;
    let scenario = q
        .scenario
        .as_deref()
        .map(conversion::parse_scenario)
        .transpose()?;
    let lang = q.lng.clone().unwrap_or_else(|| state.default_language.clone());
    let style = q.explanation.as_deref().unwrap_or("scientific");

    let fabia_units = conversion::to_fabia_units(&state.car, kind, q.value, &q.unit, scenario)?;
    let tr = state.translations(&lang);
    let html = format_embed(&tr, style, q.value, &q.unit, fabia_units, scenario)?;
    Ok(Html(html))
}

/// 랜딩 페이지를 돌려준다.
async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let path = state.static_dir.join("index.html");
    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| ApiError::internal(format!("landing page unavailable: {e}")))?;
    Ok(Html(content))
}

/// 전체 라우터를 구성한다.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/convert/mass/:mass", get(convert_mass))
        .route("/convert/length/:length", get(convert_length))
        .route("/convert/width/:width", get(convert_width))
        .route("/convert/height/:height", get(convert_height))
        .route("/convert/area/:area", get(convert_area))
        .route("/convert/power/:power", get(convert_power))
        .route("/embed", get(embed))
        .with_state(Arc::new(state))
}

/// 설정대로 서버를 띄우고 종료될 때까지 요청을 처리한다.
pub async fn serve(cfg: &Config) -> Result<(), std::io::Error> {
    let app = router(AppState::from_config(cfg));
    let listener = tokio::net::TcpListener::bind(&cfg.bind).await?;
    log::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await
}
