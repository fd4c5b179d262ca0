use crate::{
    core::{EbClient, EbError},
    weather::{model::WeatherReading, wire},
};

pub(super) async fn fetch_weather(
    client: &EbClient,
    location: &str,
) -> Result<WeatherReading, EbError> {
    let key = client.keys().weather()?;

    let mut url = client.base_weather().clone();
    url.query_pairs_mut()
        .append_pair("q", location)
        .append_pair("appid", key);

    let resp = client.http().get(url).send().await?;

    if !resp.status().is_success() {
        return Err(EbError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }

    let body = resp.text().await?;
    let envelope: wire::WeatherEnvelope = serde_json::from_str(&body).map_err(EbError::Json)?;

    let main = envelope
        .main
        .ok_or_else(|| EbError::Data("weather response missing 'main' block".into()))?;
    let description = envelope
        .weather
        .into_iter()
        .next()
        .and_then(|c| c.description)
        .ok_or_else(|| EbError::Data("weather response missing condition description".into()))?;

    Ok(WeatherReading {
        temp: field(main.temp, "temp")?,
        temp_min: field(main.temp_min, "temp_min")?,
        temp_max: field(main.temp_max, "temp_max")?,
        description,
    })
}

fn field(value: Option<f64>, name: &str) -> Result<f64, EbError> {
    value.ok_or_else(|| EbError::Data(format!("weather response missing '{name}'")))
}
