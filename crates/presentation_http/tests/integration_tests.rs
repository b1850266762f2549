//! Integration tests for HTTP handlers
#![allow(clippy::expect_used)]

use std::sync::Arc;

use application::{
    DashboardService, error::ApplicationError, ports::WeatherTablePort,
};
use async_trait::async_trait;
use axum_test::TestServer;
use domain::{WeatherRow, columns};
use infrastructure::TemplateEngine;
use presentation_http::{routes::create_router, state::AppState};

/// Stub weather table serving a fixed set of rows
struct StubTable {
    rows: Vec<WeatherRow>,
    available: bool,
    fail: bool,
}

impl StubTable {
    fn with_rows(rows: Vec<WeatherRow>) -> Self {
        Self {
            rows,
            available: true,
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            rows: vec![],
            available: false,
            fail: true,
        }
    }
}

#[async_trait]
impl WeatherTablePort for StubTable {
    async fn fetch_rows(&self) -> Result<Vec<WeatherRow>, ApplicationError> {
        if self.fail {
            return Err(ApplicationError::TableSource(
                "connection refused".to_string(),
            ));
        }
        Ok(self.rows.clone())
    }

    async fn is_available(&self) -> bool {
        self.available
    }
}

fn row(region: &str, city: &str, description: &str, alert: &str) -> WeatherRow {
    WeatherRow::new()
        .with(columns::REGION, region)
        .with(columns::CITY, city)
        .with(columns::DESCRIPTION, description)
        .with(columns::TEMPERATURE, "23,5°C")
        .with(columns::HUMIDITY, "82%")
        .with(columns::RAIN_ALERT, alert)
}

fn sample_rows() -> Vec<WeatherRow> {
    vec![
        row("SP", "Campinas", "chuva leve", "alerta"),
        row("SP", "Santos", "céu limpo", ""),
        row("RJ", "Rio de Janeiro", "nublado", ""),
    ]
}

fn test_server(table: StubTable) -> TestServer {
    let state = AppState {
        dashboard: Arc::new(DashboardService::new(Arc::new(table))),
        templates: TemplateEngine::new().expect("templates compile"),
        title: "TempPad - Clima de Hoje".to_string(),
    };
    TestServer::new(create_router(state)).expect("test server")
}

#[tokio::test]
async fn dashboard_defaults_to_first_region() {
    let server = test_server(StubTable::with_rows(sample_rows()));

    let response = server.get("/").await;
    response.assert_status_ok();

    let page = response.text();
    assert!(page.contains("Campinas"));
    assert!(page.contains("Santos"));
    assert!(!page.contains("Rio de Janeiro"));
}

#[tokio::test]
async fn uf_parameter_selects_region() {
    let server = test_server(StubTable::with_rows(sample_rows()));

    let response = server.get("/").add_query_param("uf", "RJ").await;
    response.assert_status_ok();

    let page = response.text();
    assert!(page.contains("Rio de Janeiro"));
    assert!(!page.contains("Campinas"));
}

#[tokio::test]
async fn cidade_parameter_filters_case_insensitively() {
    let server = test_server(StubTable::with_rows(sample_rows()));

    let response = server
        .get("/")
        .add_query_param("uf", "SP")
        .add_query_param("cidade", "CAM")
        .await;
    response.assert_status_ok();

    let page = response.text();
    assert!(page.contains("Campinas"));
    assert!(!page.contains("Santos"));
}

#[tokio::test]
async fn active_rain_alert_is_highlighted() {
    let server = test_server(StubTable::with_rows(sample_rows()));

    let page = server.get("/").await.text();
    assert!(page.contains("⚠️ Possibilidade de Chuva: alerta 🚨"));
}

#[tokio::test]
async fn formatted_values_appear_on_cards() {
    let server = test_server(StubTable::with_rows(sample_rows()));

    let page = server.get("/").await.text();
    assert!(page.contains("Temperatura: 24°C"));
    assert!(page.contains("Umidade: 82%"));
}

#[tokio::test]
async fn empty_sheet_renders_page_without_cards() {
    let server = test_server(StubTable::with_rows(vec![]));

    let response = server.get("/").await;
    response.assert_status_ok();

    let page = response.text();
    assert!(page.contains("Nenhum dado disponível"));
}

#[tokio::test]
async fn fetch_failure_renders_502_error_page() {
    let server = test_server(StubTable::failing());

    let response = server.get("/").await;
    response.assert_status(axum::http::StatusCode::BAD_GATEWAY);

    let page = response.text();
    assert!(page.contains("Erro 502"));
    assert!(page.contains("planilha"));
    // The underlying cause stays in the logs
    assert!(!page.contains("connection refused"));
}

#[tokio::test]
async fn about_page_renders() {
    let server = test_server(StubTable::with_rows(vec![]));

    let response = server.get("/sobre").await;
    response.assert_status_ok();
    assert!(response.text().contains("Sobre o Aplicativo"));
}

#[tokio::test]
async fn learn_more_page_renders() {
    let server = test_server(StubTable::with_rows(vec![]));

    let response = server.get("/saiba-mais").await;
    response.assert_status_ok();
    assert!(response.text().contains("Saiba Mais"));
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let server = test_server(StubTable::with_rows(vec![]));

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn ready_endpoint_follows_port_availability() {
    let server = test_server(StubTable::with_rows(vec![]));
    let response = server.get("/ready").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["ready"], true);

    let server = test_server(StubTable::failing());
    let response = server.get("/ready").await;
    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);
    let body: serde_json::Value = response.json();
    assert_eq!(body["ready"], false);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let server = test_server(StubTable::with_rows(vec![]));
    let response = server.get("/nope").await;
    response.assert_status_not_found();
}
