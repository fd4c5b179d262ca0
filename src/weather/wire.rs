use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct WeatherEnvelope {
    pub(crate) main: Option<MainNode>,
    #[serde(default)]
    pub(crate) weather: Vec<ConditionItem>,
}

#[derive(Deserialize)]
pub(crate) struct MainNode {
    pub(crate) temp: Option<f64>,
    pub(crate) temp_min: Option<f64>,
    pub(crate) temp_max: Option<f64>,
}

#[derive(Deserialize)]
pub(crate) struct ConditionItem {
    pub(crate) description: Option<String>,
}
