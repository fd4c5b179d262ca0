use crate::{
    core::{EbClient, EbError},
    news::{DEFAULT_QUERY, model::Headline, wire},
};

pub(super) async fn fetch_headlines(
    client: &EbClient,
    query: Option<&str>,
) -> Result<Vec<Headline>, EbError> {
    let key = client.keys().news()?;

    let term = match query {
        Some(q) if !q.trim().is_empty() => q,
        _ => DEFAULT_QUERY,
    };

    let mut url = client.base_news().clone();
    url.query_pairs_mut()
        .append_pair("q", term)
        .append_pair("apiKey", key);

    let resp = client.http().get(url).send().await?;

    if !resp.status().is_success() {
        return Err(EbError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }

    let body = resp.text().await?;
    let envelope: wire::HeadlinesEnvelope = serde_json::from_str(&body).map_err(EbError::Json)?;

    if let Some(status) = envelope.status.as_deref()
        && status != "ok"
    {
        let detail = envelope.message.unwrap_or_else(|| status.to_string());
        return Err(EbError::Data(format!("news source error: {detail}")));
    }

    let headlines = envelope
        .articles
        .into_iter()
        .filter_map(|item| {
            // Rows without a title or a clickable link are useless to the panel.
            let title = item.title?;
            let link = item.url.filter(|u| !u.is_empty())?;
            Some(Headline { title, link })
        })
        .collect();

    Ok(headlines)
}
