use super::models::Book;
use crate::core::FetchError;

/// Result of running a search through the pipeline.
///
/// `Empty` and `Failed` render the same way in the UI; the split is
/// there so callers and tests can tell them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The response decoded completely
    Found(Vec<Book>),
    /// Nothing to decode: empty query or no response body
    Empty,
    /// Decoding stopped early. `partial` holds every book built
    /// before the failing item.
    Failed { error: FetchError, partial: Vec<Book> },
}

impl SearchOutcome {
    pub fn books(&self) -> &[Book] {
        match self {
            SearchOutcome::Found(books) => books,
            SearchOutcome::Empty => &[],
            SearchOutcome::Failed { partial, .. } => partial,
        }
    }

    pub fn into_books(self) -> Vec<Book> {
        match self {
            SearchOutcome::Found(books) => books,
            SearchOutcome::Empty => Vec::new(),
            SearchOutcome::Failed { partial, .. } => partial,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            SearchOutcome::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// True when there is no book to show, whatever the reason.
    pub fn is_no_result(&self) -> bool {
        self.books().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_keeps_the_prefix_of_a_failed_decode() {
        let outcome = SearchOutcome::Failed {
            error: FetchError::Decode(String::from("missing field `title`")),
            partial: vec![Book::new("Dune", "Frank Herbert", "https://example.com/dune")],
        };
        assert!(!outcome.is_no_result());
        assert_eq!(outcome.books().len(), 1);
        assert!(matches!(outcome.error(), Some(FetchError::Decode(_))));
        assert_eq!(outcome.into_books()[0].title(), "Dune");
    }

    #[test]
    fn it_treats_empty_and_empty_found_as_no_result() {
        assert!(SearchOutcome::Empty.is_no_result());
        assert!(SearchOutcome::Found(vec![]).is_no_result());
        assert!(SearchOutcome::Empty.error().is_none());
    }
}
