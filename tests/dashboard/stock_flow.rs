use chrono::{DateTime, TimeZone, Utc};
use httpmock::MockServer;

use earlybird::{
    Dashboard, EbError, FieldMessage, Lookback, StockView, SymbolStore,
    dashboard::{REJECTED_MESSAGE, SENTINEL},
};

use crate::common;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap()
}

fn june_bars() -> String {
    common::stock_body(
        "AAPL",
        &[
            ("2024-06-10", 192.25),
            ("2024-06-11", 193.12),
            ("2024-06-12", 196.89),
            ("2024-06-13", 198.11),
            ("2024-06-14", 199.02),
        ],
    )
}

struct Fixture {
    server: MockServer,
    dir: tempfile::TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            server: common::setup_server(),
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn store(&self) -> SymbolStore {
        SymbolStore::new(self.dir.path().join("lastSymbol.txt"))
    }

    fn dashboard(&self) -> Dashboard {
        Dashboard::new(common::test_client(&self.server), self.store())
    }
}

#[tokio::test]
async fn empty_input_falls_back_to_the_persisted_symbol() {
    let fx = Fixture::new();
    fx.store().save("AAPL").unwrap();
    let mock = common::mock_stock(&fx.server, "AAPL", &june_bars());

    let view = fx
        .dashboard()
        .stock_panel("", Lookback::days(7), now())
        .await
        .unwrap();

    mock.assert();
    let StockView::Chart(chart) = view else {
        panic!("expected a chart, got {view:?}");
    };
    assert_eq!(chart.symbol, "AAPL");
    assert_eq!(chart.title(), "AAPL Stock Price");
    assert_eq!(chart.points.len(), 5);
}

#[tokio::test]
async fn sentinel_input_falls_back_the_same_way() {
    let fx = Fixture::new();
    fx.store().save("AAPL").unwrap();
    let mock = common::mock_stock(&fx.server, "AAPL", &june_bars());

    let view = fx
        .dashboard()
        .stock_panel(SENTINEL, Lookback::days(7), now())
        .await
        .unwrap();

    mock.assert();
    assert!(matches!(view, StockView::Chart(ref c) if c.symbol == "AAPL"));
}

#[tokio::test]
async fn successful_query_persists_the_symbol() {
    let fx = Fixture::new();
    fx.store().save("AAPL").unwrap();
    let body = common::stock_body("MSFT", &[("2024-06-13", 441.58), ("2024-06-14", 442.57)]);
    let mock = common::mock_stock(&fx.server, "MSFT", &body);

    let view = fx
        .dashboard()
        .stock_panel("MSFT", Lookback::days(7), now())
        .await
        .unwrap();

    mock.assert();
    assert!(matches!(view, StockView::Chart(ref c) if c.symbol == "MSFT"));
    assert_eq!(fx.store().load().unwrap(), Some("MSFT".to_string()));
}

#[tokio::test]
async fn failed_query_resets_the_field_and_keeps_the_old_symbol() {
    let fx = Fixture::new();
    fx.store().save("AAPL").unwrap();
    let mock = common::mock_stock(
        &fx.server,
        "ZZZINVALID",
        r#"{"Error Message":"Invalid API call."}"#,
    );

    let view = fx
        .dashboard()
        .stock_panel("ZZZINVALID", Lookback::days(7), now())
        .await
        .unwrap();

    mock.assert();
    assert_eq!(view, StockView::Reset(FieldMessage::Rejected));
    assert_eq!(
        FieldMessage::Rejected.message(),
        "Invalid Stock Symbol/Out of api uses"
    );
    // A failed fetch never touches the persisted value.
    assert_eq!(fx.store().load().unwrap(), Some("AAPL".to_string()));
}

#[tokio::test]
async fn no_input_and_nothing_persisted_prompts_without_fetching() {
    let fx = Fixture::new();
    let mock = common::mock_stock(&fx.server, "AAPL", &june_bars());

    let view = fx
        .dashboard()
        .stock_panel("", Lookback::days(7), now())
        .await
        .unwrap();

    assert_eq!(view, StockView::Reset(FieldMessage::Prompt));
    assert_eq!(FieldMessage::Prompt.message(), "Enter Stock Symbol");
    mock.assert_hits(0);
}

#[tokio::test]
async fn reset_message_input_prompts_without_fetching() {
    let fx = Fixture::new();
    fx.store().save("AAPL").unwrap();
    let mock = common::mock_stock(&fx.server, "AAPL", &june_bars());

    let view = fx
        .dashboard()
        .stock_panel(REJECTED_MESSAGE, Lookback::days(7), now())
        .await
        .unwrap();

    assert_eq!(view, StockView::Reset(FieldMessage::Prompt));
    mock.assert_hits(0);
}

#[tokio::test]
async fn invalid_lookback_is_rejected_before_any_fetch() {
    let fx = Fixture::new();
    fx.store().save("AAPL").unwrap();
    let mock = common::mock_stock(&fx.server, "AAPL", &june_bars());

    let err = fx
        .dashboard()
        .stock_panel("AAPL", Lookback::days(0), now())
        .await
        .unwrap_err();

    assert!(matches!(err, EbError::InvalidWindow { days: 0 }));
    mock.assert_hits(0);
}

#[tokio::test]
async fn chart_points_are_clipped_to_the_lookback_window() {
    let fx = Fixture::new();
    let body = common::stock_body(
        "AAPL",
        &[
            ("2024-03-01", 180.75), // far outside a 7-day window
            ("2024-06-12", 196.89),
            ("2024-06-14", 199.02),
            ("2024-06-15", 200.00), // "today": excluded by the one-day offset
        ],
    );
    let mock = common::mock_stock(&fx.server, "AAPL", &body);

    let view = fx
        .dashboard()
        .stock_panel("AAPL", Lookback::days(7), now())
        .await
        .unwrap();

    mock.assert();
    let StockView::Chart(chart) = view else {
        panic!("expected a chart");
    };
    assert_eq!(chart.points.len(), 2);
    assert_eq!(chart.points[0].close, 196.89);
    assert_eq!(chart.points[1].close, 199.02);
}
