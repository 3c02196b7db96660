use std::io::Write;

use anyhow::Result;

use super::viewer::UrlViewer;
use crate::books::Book;

/// Message shown in place of the list when there is nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    Idle,
    Loading,
    NoDataFound,
    NoInternet,
}

impl EmptyState {
    pub fn message(&self) -> &'static str {
        match self {
            EmptyState::Idle => "Search for a book title or author.",
            EmptyState::Loading => "Searching...",
            EmptyState::NoDataFound => "No books found.",
            EmptyState::NoInternet => "No internet connection.",
        }
    }
}

/// A rendered list entry. `position` is zero based.
#[derive(Debug, PartialEq, Eq)]
pub struct Row<'a> {
    pub position: usize,
    pub title: &'a str,
    pub author: &'a str,
}

/// Backing collection for the result list.
#[derive(Debug, Default)]
pub struct BookAdapter {
    books: Vec<Book>,
}

impl BookAdapter {
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Swap the contents for `books`, keeping their order.
    pub fn replace_all(&mut self, books: impl IntoIterator<Item = Book>) {
        self.books.clear();
        self.books.extend(books);
    }

    pub fn clear(&mut self) {
        self.books.clear();
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Book> {
        self.books.get(position)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.books.iter().enumerate().map(|(position, book)| Row {
            position,
            title: book.title(),
            author: book.author(),
        })
    }

    /// Write one numbered entry per book, or the empty state message.
    pub fn render<W: Write>(&self, out: &mut W, empty: EmptyState) -> Result<()> {
        if self.books.is_empty() {
            writeln!(out, "{}", empty.message())?;
            return Ok(());
        }
        for row in self.rows() {
            writeln!(out, "{:>2}. {}", row.position + 1, row.title)?;
            writeln!(out, "    {}", row.author)?;
        }
        Ok(())
    }

    /// Ask `viewer` to open the detail page of the book at `position`.
    /// Returns false when there's no such book or the viewer couldn't
    /// handle the link.
    pub fn select(&self, position: usize, viewer: &dyn UrlViewer) -> bool {
        let Some(book) = self.books.get(position) else {
            tracing::warn!(position, len = self.books.len(), "No book at position");
            return false;
        };
        match viewer.open(book.detail_url()) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(url = book.detail_url(), "Failed to open book link: {}", e);
                false
            }
        }
    }
}
