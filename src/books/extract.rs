use serde_json::{Map, Value};

use super::models::{Book, UNKNOWN_AUTHOR, VolumeItem, VolumesResponse};
use super::outcome::SearchOutcome;
use crate::core::FetchError;

/// Decode a volumes response body into books, in response order.
///
/// A blank body is `Empty`. The first item that fails to decode ends
/// extraction: the result is `Failed` carrying the books decoded so
/// far, and items after the failing one are dropped.
pub fn extract(body: &str) -> SearchOutcome {
    if body.trim().is_empty() {
        return SearchOutcome::Empty;
    }

    let response: VolumesResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(e) => return failed(FetchError::Decode(e.to_string()), Vec::new()),
    };

    let mut books = Vec::with_capacity(response.items.len());
    for (index, item) in response.items.into_iter().enumerate() {
        match book_from_item(item) {
            Ok(book) => books.push(book),
            Err(e) => return failed(FetchError::Decode(format!("item {}: {}", index, e)), books),
        }
    }

    SearchOutcome::Found(books)
}

fn book_from_item(item: Value) -> Result<Book, String> {
    let VolumeItem { volume_info } = serde_json::from_value(item).map_err(|e| e.to_string())?;
    let title = required_text(&volume_info, "title")?;
    let author = match volume_info.get("authors") {
        None => UNKNOWN_AUTHOR.to_string(),
        Some(authors) => first_author(authors)?,
    };
    let info_link = required_text(&volume_info, "infoLink")?;
    Ok(Book::new(&title, &author, &info_link))
}

// Strings verbatim, other values as their JSON text. Null has no text.
fn text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn required_text(info: &Map<String, Value>, key: &str) -> Result<String, String> {
    let value = info
        .get(key)
        .ok_or_else(|| format!("missing field `{}`", key))?;
    text(value).ok_or_else(|| format!("`{}` is null", key))
}

// Present `authors` must be a non-empty array; null counts as present
fn first_author(authors: &Value) -> Result<String, String> {
    match authors {
        Value::Array(list) => {
            let first = list
                .first()
                .ok_or_else(|| String::from("`authors` is empty"))?;
            text(first).ok_or_else(|| String::from("first author is null"))
        }
        other => Err(format!("`authors` is not an array: {}", other)),
    }
}

fn failed(error: FetchError, partial: Vec<Book>) -> SearchOutcome {
    tracing::error!(
        kind = error.kind(),
        decoded = partial.len(),
        "{}",
        error
    );
    SearchOutcome::Failed { error, partial }
}
