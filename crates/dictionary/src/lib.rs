use datamuse_api::get_words;

mod datamuse_api;
mod dictionary;

pub use datamuse_api::DATAMUSE_API_URL;
pub use dictionary::{Query, Relation, WordEntry};

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("The HTTP request failed")]
    Fetch(#[source] reqwest::Error),
    #[error("The response could not be decoded")]
    Deserialize(#[source] serde_json::Error),
}

pub struct Dictionary {
    client: reqwest::Client,
    base_url: String,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_base_url(DATAMUSE_API_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn get_words(&self, query: &Query) -> Result<Vec<WordEntry>, DictionaryError> {
        get_words(&self.client, &self.base_url, query).await
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
