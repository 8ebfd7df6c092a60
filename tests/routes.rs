//! HTTP 표면 테스트. 라우터를 띄우지 않고 oneshot으로 요청을 흘려 보낸다.
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use fabia_unit_service::config::Config;
use fabia_unit_service::server::{router, AppState};

fn app() -> Router {
    router(AppState::from_config(&Config::default()))
}

async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
    get_with_headers(uri, &[]).await
}

async fn get_with_headers(uri: &str, headers: &[(&str, &str)]) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = builder.body(Body::empty()).expect("request");
    let response = app().oneshot(request).await.expect("response");
    let status = response.status();
    let body = response.into_body().collect().await.expect("body").to_bytes();
    (status, body.to_vec())
}

fn json(body: &[u8]) -> Value {
    serde_json::from_slice(body).expect("json body")
}

#[tokio::test]
async fn convert_mass_endpoint() {
    let (status, body) = get("/convert/mass/2110?unit=kg").await;
    assert_eq!(status, StatusCode::OK);
    let v = json(&body);
    assert_eq!(v["fabia_units"], 2.0);
    assert_eq!(v["message"], "Mass converted successfully.");
}

#[tokio::test]
async fn convert_message_follows_accept_language() {
    let (status, body) =
        get_with_headers("/convert/mass/2110?unit=kg", &[("accept-language", "es,en;q=0.8")])
            .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["message"], "Masa convertida correctamente.");
}

#[tokio::test]
async fn convert_length_width_height_endpoints() {
    let (status, body) = get("/convert/length/792?unit=cm").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["fabia_units"], 2.0);

    let (status, body) = get("/convert/width/3.3?unit=m").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["fabia_units"], 2.0);

    let (status, body) = get("/convert/height/2.996?unit=m").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["fabia_units"], 2.0);
}

#[tokio::test]
async fn convert_area_scenarios() {
    let (status, body) = get("/convert/area/10000?unit=m2&scenario=parking_lot").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["fabia_units"], 800.0);

    // 시나리오를 생략하면 packed가 기본이다.
    let (status, body) = get("/convert/area/12.5?unit=m2").await;
    assert_eq!(status, StatusCode::OK);
    let packed = json(&body)["fabia_units"].as_f64().expect("number");
    assert!(packed > 1.0);
}

#[tokio::test]
async fn convert_power_endpoint() {
    let (status, body) = get("/convert/power/125.98?unit=hp").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["fabia_units"], 2.0);
}

#[tokio::test]
async fn unknown_unit_is_a_client_error() {
    let (status, body) = get("/convert/mass/1?unit=xyz").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let detail = json(&body)["detail"].as_str().expect("detail").to_string();
    assert!(detail.contains("xyz"), "detail={detail}");
}

#[tokio::test]
async fn invalid_scenario_is_a_client_error() {
    let (status, _) = get("/convert/area/1?unit=m2&scenario=sideways").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_unit_parameter_is_a_client_error() {
    let (status, _) = get("/convert/mass/1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn embed_returns_html_fragment() {
    let request = Request::builder()
        .uri("/embed?value=2110&conversion_type=mass&unit=kg")
        .body(Body::empty())
        .expect("request");
    let response = app().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"), "content-type={content_type}");
    let body = response.into_body().collect().await.expect("body").to_bytes();
    let html = String::from_utf8(body.to_vec()).expect("utf-8");
    assert!(html.contains("<p"));
    assert!(html.contains("2 Škoda Fabia units"));
}

#[tokio::test]
async fn embed_area_with_scenario_and_style() {
    let (status, body) = get(
        "/embed?value=10000&conversion_type=area&unit=m2&scenario=parking_lot&explanation=funny",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).expect("utf-8");
    assert!(html.contains("800"));
    assert!(html.contains("parking lot"));
}

#[tokio::test]
async fn embed_localizes_to_spanish() {
    let (status, body) =
        get("/embed?value=2110&conversion_type=mass&unit=kg&lng=es").await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).expect("utf-8");
    assert!(html.contains("unidades Škoda Fabia"), "html={html}");
}

#[tokio::test]
async fn embed_missing_language_falls_back_to_english() {
    let (status, body) =
        get("/embed?value=2110&conversion_type=mass&unit=kg&lng=de").await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).expect("utf-8");
    assert!(html.contains("Škoda Fabia units"), "html={html}");
}

#[tokio::test]
async fn embed_unknown_conversion_type_is_a_client_error() {
    let (status, _) = get("/embed?value=1&conversion_type=volume&unit=m3").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn embed_unknown_style_is_a_server_error() {
    let (status, body) =
        get("/embed?value=1&conversion_type=mass&unit=kg&explanation=sarcastic").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let detail = json(&body)["detail"].as_str().expect("detail").to_string();
    assert!(detail.contains("sarcastic"), "detail={detail}");
}

#[tokio::test]
async fn index_serves_landing_page() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).expect("utf-8");
    assert!(html.contains("Fabia Unit Converter"));
}
