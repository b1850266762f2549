//! Template engine for the dashboard pages
//!
//! Uses Tera with templates embedded at compile time: a base layout with the
//! sidebar (navigation, region selector, city search), the forecast page, the
//! two static pages and a minimal error page.

use std::sync::Arc;

use application::views::ForecastView;
use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(e.to_string()),
        }
    }
}

/// Template context wrapper for type-safe context building
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    inner: Context,
}

impl TemplateContext {
    /// Create a new empty template context
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Context::new(),
        }
    }

    /// Insert a value into the context
    pub fn insert<T: Serialize>(&mut self, key: &str, value: &T) {
        self.inner.insert(key, value);
    }
}

/// Embedded templates - compiled into the binary
mod embedded {
    pub const BASE: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{% block title %}TempPad{% endblock title %}</title>
    <style>
        body { font-family: sans-serif; margin: 0; display: flex; }
        .sidebar { width: 16rem; min-height: 100vh; padding: 1rem; background: #f0f2f6; }
        .sidebar nav a { display: block; margin: 0.25rem 0; }
        .sidebar form label { display: block; margin-top: 0.75rem; }
        .content { flex: 1; padding: 1rem 2rem; }
        .card { border-bottom: 1px solid #ddd; padding: 0.5rem 0; }
        .alert { color: red; font-weight: bold; }
    </style>
</head>
<body>
    <aside class="sidebar">
        <h2>TempPad</h2>
        <nav>
            <a href="/">Previsão do Tempo</a>
            <a href="/sobre">Sobre</a>
            <a href="/saiba-mais">Saiba Mais</a>
        </nav>
        {% block sidebar %}{% endblock sidebar %}
        <hr>
        <p>Desenvolvido por <a href="https://linktr.ee/Pedrofsf">PedroFS</a></p>
    </aside>
    <main class="content">
        {% block content %}{% endblock content %}
    </main>
</body>
</html>
"#;

    pub const FORECAST: &str = r#"{% extends "base.html" %}
{% block title %}{{ title }}{% endblock title %}
{% block sidebar %}
<form method="get" action="/">
    <label for="uf">Selecione um Estado</label>
    <select name="uf" id="uf">
        {% for region in regions %}
        <option value="{{ region }}"{% if selected_region == region %} selected{% endif %}>{{ region }}</option>
        {% endfor %}
    </select>
    <label for="cidade">Qual cidade deseja saber:</label>
    <input type="text" name="cidade" id="cidade" value="{{ city_query }}">
    <button type="submit">Buscar</button>
</form>
{% endblock sidebar %}
{% block content %}
<h1>{{ title }}</h1>
{% if cards %}
{% for card in cards %}
<article class="card">
    <h4>{{ card.emoji }} {{ card.city }} - {{ card.region }}</h4>
    <p>Temperatura: {{ card.temperature }} | Sensação Térmica: {{ card.feels_like }}</p>
    <p>Máxima: {{ card.max_temperature }} | Mínima: {{ card.min_temperature }}</p>
    <p>Possibilidade de Chuva: {{ card.rain_probability }} | Descrição: {{ card.description }}</p>
    <p>Umidade: {{ card.humidity }} | Visibilidade: {{ card.visibility }}</p>
    <p>Nascer do Sol: {{ card.sunrise }} | Pôr do Sol: {{ card.sunset }}</p>
    <p>Velocidade do Vento: {{ card.wind_speed }} | Direção do Vento: {{ card.wind_direction }}</p>
    {% if card.rain_alert %}
    {% if card.rain_alert.active %}
    <p class="alert">⚠️ Possibilidade de Chuva: {{ card.rain_alert.message }} 🚨</p>
    {% else %}
    <p>Alerta de Chuva: {{ card.rain_alert.message }}</p>
    {% endif %}
    {% endif %}
</article>
{% endfor %}
{% else %}
<p>Nenhum dado disponível para a seleção atual.</p>
{% endif %}
{% endblock content %}
"#;

    pub const ABOUT: &str = r#"{% extends "base.html" %}
{% block title %}Sobre - TempPad{% endblock title %}
{% block content %}
<h2>Sobre o Aplicativo</h2>
<p>'TempPad' é um aplicativo interativo e fácil de usar que fornece
informações detalhadas e atualizadas sobre a previsão do tempo para
diferentes cidades que a Ceneged é presente. Ele foi projetado para ser
intuitivo, permitindo aos usuários uma navegação simples e uma experiência
de usuário agradável.</p>
{% endblock content %}
"#;

    pub const LEARN_MORE: &str = r#"{% extends "base.html" %}
{% block title %}Saiba Mais - TempPad{% endblock title %}
{% block content %}
<h2>Saiba Mais</h2>
<p>Confira este vídeo para saber um pouco mais sobre o desenvolvimento desse
App. Acesse o link abaixo:</p>
<p><a href="https://www.youtube.com/">https://www.youtube.com/</a></p>
{% endblock content %}
"#;

    pub const ERROR: &str = r#"{% extends "base.html" %}
{% block title %}Erro - TempPad{% endblock title %}
{% block content %}
<h2>Erro {{ status }}</h2>
<p>{{ message }}</p>
<p><a href="/">Voltar para a previsão</a></p>
{% endblock content %}
"#;
}

/// Template engine using Tera
#[derive(Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine").finish_non_exhaustive()
    }
}

impl TemplateEngine {
    /// Create a new template engine with the embedded templates
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);

        tera.add_raw_templates([
            ("base.html", embedded::BASE),
            ("forecast.html", embedded::FORECAST),
            ("about.html", embedded::ABOUT),
            ("learn_more.html", embedded::LEARN_MORE),
            ("error.html", embedded::ERROR),
        ])
        .map_err(|e| TemplateError::Compile(e.to_string()))?;

        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Render a template with the given context
    pub fn render(&self, template_name: &str, context: &TemplateContext) -> Result<String, TemplateError> {
        self.tera
            .render(template_name, &context.inner)
            .map_err(TemplateError::from)
    }

    /// Render the forecast page
    pub fn render_forecast(&self, title: &str, view: &ForecastView) -> Result<String, TemplateError> {
        let mut ctx = TemplateContext::new();
        ctx.insert("title", &title);
        ctx.insert("regions", &view.regions);
        ctx.insert("selected_region", &view.selected_region);
        ctx.insert("city_query", &view.city_query);
        ctx.insert("cards", &view.cards);

        self.render("forecast.html", &ctx)
    }

    /// Render the about page
    pub fn render_about(&self) -> Result<String, TemplateError> {
        self.render("about.html", &TemplateContext::new())
    }

    /// Render the learn-more page
    pub fn render_learn_more(&self) -> Result<String, TemplateError> {
        self.render("learn_more.html", &TemplateContext::new())
    }

    /// Render the error page
    pub fn render_error(&self, status: u16, message: &str) -> Result<String, TemplateError> {
        let mut ctx = TemplateContext::new();
        ctx.insert("status", &status);
        ctx.insert("message", &message);

        self.render("error.html", &ctx)
    }

    /// Check if a template exists
    #[must_use]
    pub fn template_exists(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }
}

#[cfg(test)]
mod tests {
    use application::views::{CityCard, RainAlert};
    use domain::{WeatherRow, columns};

    use super::*;

    fn sample_view() -> ForecastView {
        let row = WeatherRow::new()
            .with(columns::REGION, "SP")
            .with(columns::CITY, "Campinas")
            .with(columns::DESCRIPTION, "chuva leve")
            .with(columns::TEMPERATURE, "23,5°C")
            .with(columns::RAIN_ALERT, "alerta");

        ForecastView {
            regions: vec!["SP".to_string(), "RJ".to_string()],
            selected_region: Some("SP".to_string()),
            city_query: "cam".to_string(),
            cards: vec![CityCard::from_row(&row)],
        }
    }

    #[test]
    fn engine_creation_compiles_embedded_templates() {
        let engine = TemplateEngine::new().unwrap();
        assert!(engine.template_exists("base.html"));
        assert!(engine.template_exists("forecast.html"));
        assert!(engine.template_exists("error.html"));
        assert!(!engine.template_exists("nonexistent.html"));
    }

    #[test]
    fn forecast_page_renders_cards() {
        let engine = TemplateEngine::new().unwrap();
        let page = engine
            .render_forecast("TempPad - Clima de Hoje", &sample_view())
            .unwrap();

        assert!(page.contains("TempPad - Clima de Hoje"));
        assert!(page.contains("🌦️ Campinas - SP"));
        assert!(page.contains("Temperatura: 24°C"));
    }

    #[test]
    fn forecast_page_marks_selected_region() {
        let engine = TemplateEngine::new().unwrap();
        let page = engine.render_forecast("TempPad", &sample_view()).unwrap();

        assert!(page.contains(r#"<option value="SP" selected>"#));
        assert!(page.contains(r#"<option value="RJ">"#));
        assert!(page.contains(r#"value="cam""#));
    }

    #[test]
    fn active_alert_renders_highlighted() {
        let engine = TemplateEngine::new().unwrap();
        let page = engine.render_forecast("TempPad", &sample_view()).unwrap();

        assert!(page.contains(r#"<p class="alert">⚠️ Possibilidade de Chuva: alerta 🚨</p>"#));
    }

    #[test]
    fn inactive_alert_renders_plain_line() {
        let mut view = sample_view();
        view.cards[0].rain_alert = Some(RainAlert {
            message: "chuva forte amanhã".to_string(),
            active: false,
        });

        let engine = TemplateEngine::new().unwrap();
        let page = engine.render_forecast("TempPad", &view).unwrap();

        assert!(page.contains("Alerta de Chuva: chuva forte amanhã"));
        assert!(!page.contains("🚨"));
    }

    #[test]
    fn empty_view_renders_informational_line() {
        let view = ForecastView {
            regions: vec![],
            selected_region: None,
            city_query: String::new(),
            cards: vec![],
        };

        let engine = TemplateEngine::new().unwrap();
        let page = engine.render_forecast("TempPad", &view).unwrap();

        assert!(page.contains("Nenhum dado disponível"));
        assert!(!page.contains("<article"));
    }

    #[test]
    fn about_page_renders_static_text() {
        let engine = TemplateEngine::new().unwrap();
        let page = engine.render_about().unwrap();
        assert!(page.contains("Sobre o Aplicativo"));
        assert!(page.contains("Ceneged"));
    }

    #[test]
    fn learn_more_page_renders_static_text() {
        let engine = TemplateEngine::new().unwrap();
        let page = engine.render_learn_more().unwrap();
        assert!(page.contains("Saiba Mais"));
        assert!(page.contains("https://www.youtube.com/"));
    }

    #[test]
    fn error_page_carries_status_and_message() {
        let engine = TemplateEngine::new().unwrap();
        let page = engine.render_error(502, "fonte de dados indisponível").unwrap();
        assert!(page.contains("Erro 502"));
        assert!(page.contains("fonte de dados indisponível"));
    }

    #[test]
    fn sidebar_navigation_on_every_page() {
        let engine = TemplateEngine::new().unwrap();
        for page in [
            engine.render_about().unwrap(),
            engine.render_learn_more().unwrap(),
            engine.render_forecast("TempPad", &sample_view()).unwrap(),
        ] {
            assert!(page.contains("Previsão do Tempo"));
            assert!(page.contains("linktr.ee/Pedrofsf"));
        }
    }

    #[test]
    fn html_in_cell_values_is_escaped() {
        let row = WeatherRow::new()
            .with(columns::REGION, "SP")
            .with(columns::CITY, "<script>alert(1)</script>");

        let view = ForecastView {
            regions: vec!["SP".to_string()],
            selected_region: Some("SP".to_string()),
            city_query: String::new(),
            cards: vec![CityCard::from_row(&row)],
        };

        let engine = TemplateEngine::new().unwrap();
        let page = engine.render_forecast("TempPad", &view).unwrap();
        assert!(!page.contains("<script>"));
    }
}
