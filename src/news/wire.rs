use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct HeadlinesEnvelope {
    /// `"ok"` on success; anything else signals an in-band error.
    pub(crate) status: Option<String>,
    pub(crate) message: Option<String>,
    #[serde(default)]
    pub(crate) articles: Vec<ArticleItem>,
}

#[derive(Deserialize)]
pub(crate) struct ArticleItem {
    pub(crate) title: Option<String>,
    pub(crate) url: Option<String>,
}
