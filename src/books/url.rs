use reqwest::Url;

use crate::core::FetchError;

pub const VOLUMES_PATH: &str = "/books/v1/volumes";

/// Build the volumes search URL for `query`.
///
/// Unless `escape` is set the query goes into the URL as typed. The
/// only change made is the percent-encoding `Url::parse` applies to
/// bytes that can't appear in a query (spaces, quotes, control
/// characters), so `&`, `#` and `+` in the query keep their URL
/// meaning.
pub fn volumes_url(
    api_base_url: &str,
    query: &str,
    max_results: u32,
    escape: bool,
) -> Result<Url, FetchError> {
    let term = if escape {
        urlencoding::encode(query).into_owned()
    } else {
        query.to_string()
    };
    let raw = format!(
        "{}{}?q=intitle:{}&maxResults={}",
        api_base_url.trim_end_matches('/'),
        VOLUMES_PATH,
        term,
        max_results
    );
    Url::parse(&raw).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", raw, e)))
}
