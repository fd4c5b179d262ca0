use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

use crate::{
    core::{EbClient, EbError},
    stock::{OutputSize, model::DailySeries, model::PricePoint, wire},
};

pub(super) async fn fetch_daily(
    client: &EbClient,
    symbol: &str,
    output_size: OutputSize,
) -> Result<DailySeries, EbError> {
    let key = client.keys().stock()?;

    let mut url = client.base_stock().clone();
    url.query_pairs_mut()
        .append_pair("function", "TIME_SERIES_DAILY")
        .append_pair("symbol", symbol)
        .append_pair("outputsize", output_size.as_str())
        .append_pair("apikey", key);

    let resp = client.http().get(url).send().await?;

    if !resp.status().is_success() {
        return Err(EbError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }

    let body = resp.text().await?;
    let envelope: wire::DailyEnvelope = serde_json::from_str(&body).map_err(EbError::Json)?;

    // The source reports failures in-band with a 200 status.
    if let Some(msg) = envelope.error_message {
        return Err(EbError::Data(format!("stock source error: {msg}")));
    }
    if let Some(msg) = envelope.note.or(envelope.information) {
        return Err(EbError::Data(format!("stock source notice: {msg}")));
    }

    let series = envelope
        .series
        .ok_or_else(|| EbError::Data("stock response missing daily series".into()))?;

    let mut points = Vec::with_capacity(series.len());
    for (date, bar) in series {
        let day = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map_err(|e| EbError::Data(format!("bad series date '{date}': {e}")))?;
        let close = bar
            .close
            .parse::<f64>()
            .map_err(|e| EbError::Data(format!("bad close for {date}: {e}")))?;
        points.push(PricePoint {
            ts: Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN)),
            close,
        });
    }

    Ok(DailySeries {
        symbol: symbol.to_string(),
        points,
    })
}
