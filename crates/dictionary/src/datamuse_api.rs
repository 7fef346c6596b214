// https://www.datamuse.com/api/ - sl (sounds like), rel_syn, rel_ant; md=d adds definitions

use tracing::debug;

use crate::{DictionaryError, Query, WordEntry};

pub const DATAMUSE_API_URL: &'static str = "https://api.datamuse.com/words";

pub(crate) fn build_request(
    client: &reqwest::Client,
    base_url: &str,
    query: &Query,
) -> Result<reqwest::Request, DictionaryError> {
    client
        .get(base_url)
        .query(&[(query.relation.query_param(), &query.word[..]), ("md", "d")])
        .build()
        .map_err(DictionaryError::Fetch)
}

pub(crate) async fn get_words(
    client: &reqwest::Client,
    base_url: &str,
    query: &Query,
) -> Result<Vec<WordEntry>, DictionaryError> {
    let req = build_request(client, base_url, query)?;
    debug!(url = %req.url(), "sending request");
    let res = client
        .execute(req)
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(DictionaryError::Fetch)?;
    let body = res.bytes().await.map_err(DictionaryError::Fetch)?;
    debug!(bytes = body.len(), "received response");
    decode_words(&body)
}

pub(crate) fn decode_words(body: &[u8]) -> Result<Vec<WordEntry>, DictionaryError> {
    serde_json::from_slice(body).map_err(DictionaryError::Deserialize)
}
