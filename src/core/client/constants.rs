//! Centralized constants for default endpoints and UA.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// OpenWeatherMap current-conditions endpoint (`q` + `appid` query parameters).
pub(crate) const DEFAULT_BASE_WEATHER: &str = "https://api.openweathermap.org/data/2.5/weather";

/// News search endpoint (`q` + `apiKey` query parameters).
pub(crate) const DEFAULT_BASE_NEWS: &str = "https://newsapi.org/v2/everything";

/// Alpha Vantage query endpoint (`function`/`symbol`/`apikey` query parameters).
pub(crate) const DEFAULT_BASE_STOCK: &str = "https://www.alphavantage.co/query";
