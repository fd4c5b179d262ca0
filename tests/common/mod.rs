#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use url::Url;

use earlybird::{ApiKeys, EbClient};

pub const WEATHER_KEY: &str = "weather-key";
pub const NEWS_KEY: &str = "news-key";
pub const STOCK_KEY: &str = "stock-key";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// A client with all three endpoints pointed at the mock server and a full
/// set of test keys.
pub fn test_client(server: &MockServer) -> EbClient {
    EbClient::builder()
        .base_weather(Url::parse(&format!("{}/data/2.5/weather", server.base_url())).unwrap())
        .base_news(Url::parse(&format!("{}/v2/everything", server.base_url())).unwrap())
        .base_stock(Url::parse(&format!("{}/query", server.base_url())).unwrap())
        .keys(ApiKeys::new(WEATHER_KEY, NEWS_KEY, STOCK_KEY))
        .build()
        .unwrap()
}

pub fn weather_body(temp: f64, temp_min: f64, temp_max: f64, description: &str) -> String {
    format!(
        r#"{{"weather":[{{"description":"{description}"}}],"main":{{"temp":{temp},"temp_min":{temp_min},"temp_max":{temp_max},"pressure":1014,"humidity":74}}}}"#
    )
}

pub fn mock_weather<'a>(server: &'a MockServer, location: &str, body: &str) -> Mock<'a> {
    let location = location.to_string();
    let body = body.to_string();
    server.mock(move |when, then| {
        when.method(GET)
            .path("/data/2.5/weather")
            .query_param("q", location.as_str())
            .query_param("appid", WEATHER_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(&body);
    })
}

/// A news body with `count` well-formed articles titled `headline 1..=count`.
pub fn news_body(count: usize) -> String {
    let articles: Vec<String> = (1..=count)
        .map(|i| format!(r#"{{"title":"headline {i}","url":"https://news.example/{i}"}}"#))
        .collect();
    format!(
        r#"{{"status":"ok","totalResults":{count},"articles":[{}]}}"#,
        articles.join(",")
    )
}

pub fn mock_news<'a>(server: &'a MockServer, term: &str, body: &str) -> Mock<'a> {
    let term = term.to_string();
    let body = body.to_string();
    server.mock(move |when, then| {
        when.method(GET)
            .path("/v2/everything")
            .query_param("q", term.as_str())
            .query_param("apiKey", NEWS_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(&body);
    })
}

/// An Alpha Vantage-shaped daily body from `(date, close)` pairs.
pub fn stock_body(symbol: &str, bars: &[(&str, f64)]) -> String {
    let entries: Vec<String> = bars
        .iter()
        .map(|(date, close)| {
            format!(
                r#""{date}":{{"1. open":"{close}","2. high":"{close}","3. low":"{close}","4. close":"{close}","5. volume":"1000"}}"#
            )
        })
        .collect();
    format!(
        r#"{{"Meta Data":{{"2. Symbol":"{symbol}"}},"Time Series (Daily)":{{{}}}}}"#,
        entries.join(",")
    )
}

pub fn mock_stock<'a>(server: &'a MockServer, symbol: &str, body: &str) -> Mock<'a> {
    let symbol = symbol.to_string();
    let body = body.to_string();
    server.mock(move |when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "TIME_SERIES_DAILY")
            .query_param("symbol", symbol.as_str())
            .query_param("apikey", STOCK_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(&body);
    })
}
