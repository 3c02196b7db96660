use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Shown in place of an author when a volume doesn't list any.
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

/// A single search hit. Fields are private so a `Book` can't change
/// after the decoder builds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    detail_url: String,
}

impl Book {
    pub fn new(title: &str, author: &str, detail_url: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            detail_url: detail_url.to_string(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Web page with more information about the book
    pub fn detail_url(&self) -> &str {
        &self.detail_url
    }
}

// Response shape from the volumes endpoint:
//
// {
//   "kind": "books#volumes",
//   "totalItems": 1,
//   "items": [
//     {
//       "volumeInfo": {
//         "title": "Dune",
//         "authors": ["Frank Herbert"],
//         "infoLink": "https://books.google.com/books?id=..."
//       }
//     }
//   ]
// }
//
// Items are kept as raw values so that one bad item can be decoded
// on its own without throwing away the ones before it.
#[derive(Debug, Deserialize)]
pub(crate) struct VolumesResponse {
    pub items: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VolumeItem {
    // Kept as a raw map: a present-but-null field and a missing one
    // decode differently
    #[serde(rename = "volumeInfo")]
    pub volume_info: Map<String, Value>,
}
