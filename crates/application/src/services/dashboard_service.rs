//! Dashboard service
//!
//! Builds the forecast page view: fetch the sheet rows, resolve the region
//! selection, filter, and format cards.

use std::{fmt, sync::Arc};

use domain::{RowSelection, filter_rows, regions};
use tracing::{debug, instrument};

use crate::{
    error::ApplicationError,
    ports::WeatherTablePort,
    views::{CityCard, ForecastView},
};

/// Service producing the dashboard forecast view
pub struct DashboardService {
    table: Arc<dyn WeatherTablePort>,
}

impl fmt::Debug for DashboardService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardService").finish_non_exhaustive()
    }
}

impl DashboardService {
    /// Create a new dashboard service
    pub fn new(table: Arc<dyn WeatherTablePort>) -> Self {
        Self { table }
    }

    /// Build the forecast view for a requested region and city query
    ///
    /// A requested region that does not appear in the sheet falls back to the
    /// first region (stale query params are treated as no selection). An
    /// empty sheet yields a view with no regions and no cards, not an error.
    #[instrument(skip(self))]
    pub async fn forecast(
        &self,
        requested_region: Option<&str>,
        city_query: &str,
    ) -> Result<ForecastView, ApplicationError> {
        let rows = self.table.fetch_rows().await?;
        let available = regions(&rows);

        let selected_region = requested_region
            .filter(|requested| available.iter().any(|region| region == requested))
            .map(String::from)
            .or_else(|| available.first().cloned());

        let cards = selected_region.as_ref().map_or_else(Vec::new, |region| {
            let selection = RowSelection::new(region.clone(), city_query);
            filter_rows(&rows, &selection)
                .into_iter()
                .map(CityCard::from_row)
                .collect()
        });

        debug!(
            rows = rows.len(),
            regions = available.len(),
            cards = cards.len(),
            "forecast view assembled"
        );

        Ok(ForecastView {
            regions: available,
            selected_region,
            city_query: city_query.to_string(),
            cards,
        })
    }

    /// Check whether the table source is ready to serve
    pub async fn is_ready(&self) -> bool {
        self.table.is_available().await
    }
}

#[cfg(test)]
mod tests {
    use domain::{WeatherRow, columns};

    use super::*;
    use crate::ports::MockWeatherTablePort;

    fn row(region: &str, city: &str, temperature: &str) -> WeatherRow {
        WeatherRow::new()
            .with(columns::REGION, region)
            .with(columns::CITY, city)
            .with(columns::TEMPERATURE, temperature)
    }

    fn sample_rows() -> Vec<WeatherRow> {
        vec![
            row("SP", "Campinas", "23,5°C"),
            row("SP", "Santos", "26°C"),
            row("RJ", "Rio de Janeiro", "30,2°C"),
            row("MG", "Uberlândia", "24°C"),
        ]
    }

    fn service_with_rows(rows: Vec<WeatherRow>) -> DashboardService {
        let mut mock = MockWeatherTablePort::new();
        mock.expect_fetch_rows().returning(move || Ok(rows.clone()));
        DashboardService::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn no_requested_region_defaults_to_first() {
        let service = service_with_rows(sample_rows());
        let view = service.forecast(None, "").await.unwrap();

        assert_eq!(view.selected_region.as_deref(), Some("SP"));
        assert_eq!(view.regions, vec!["SP", "RJ", "MG"]);
        assert_eq!(view.cards.len(), 2);
        assert_eq!(view.cards[0].city, "Campinas");
        assert_eq!(view.cards[1].city, "Santos");
    }

    #[tokio::test]
    async fn requested_region_filters_cards() {
        let service = service_with_rows(sample_rows());
        let view = service.forecast(Some("RJ"), "").await.unwrap();

        assert_eq!(view.selected_region.as_deref(), Some("RJ"));
        assert_eq!(view.cards.len(), 1);
        assert_eq!(view.cards[0].city, "Rio de Janeiro");
        assert_eq!(view.cards[0].temperature, "30°C");
    }

    #[tokio::test]
    async fn unknown_region_falls_back_to_first() {
        let service = service_with_rows(sample_rows());
        let view = service.forecast(Some("XX"), "").await.unwrap();

        assert_eq!(view.selected_region.as_deref(), Some("SP"));
        assert_eq!(view.cards.len(), 2);
    }

    #[tokio::test]
    async fn city_query_narrows_within_region() {
        let service = service_with_rows(sample_rows());
        let view = service.forecast(Some("SP"), "cam").await.unwrap();

        assert_eq!(view.cards.len(), 1);
        assert_eq!(view.cards[0].city, "Campinas");
        assert_eq!(view.city_query, "cam");
    }

    #[tokio::test]
    async fn empty_sheet_yields_empty_view_without_error() {
        let service = service_with_rows(vec![]);
        let view = service.forecast(Some("SP"), "cam").await.unwrap();

        assert!(view.regions.is_empty());
        assert!(view.selected_region.is_none());
        assert!(view.cards.is_empty());
        assert!(!view.has_data());
    }

    #[tokio::test]
    async fn fetch_error_propagates() {
        let mut mock = MockWeatherTablePort::new();
        mock.expect_fetch_rows()
            .returning(|| Err(ApplicationError::TableSource("boom".to_string())));
        let service = DashboardService::new(Arc::new(mock));

        let err = service.forecast(None, "").await.unwrap_err();
        assert!(matches!(err, ApplicationError::TableSource(_)));
    }

    #[tokio::test]
    async fn is_ready_reflects_port_availability() {
        let mut mock = MockWeatherTablePort::new();
        mock.expect_is_available().returning(|| true);
        let service = DashboardService::new(Arc::new(mock));
        assert!(service.is_ready().await);

        let mut mock = MockWeatherTablePort::new();
        mock.expect_is_available().returning(|| false);
        let service = DashboardService::new(Arc::new(mock));
        assert!(!service.is_ready().await);
    }

    #[test]
    fn service_debug_does_not_expose_port() {
        let service = DashboardService::new(Arc::new(MockWeatherTablePort::new()));
        let debug = format!("{service:?}");
        assert!(debug.contains("DashboardService"));
    }
}
