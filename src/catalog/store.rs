use std::collections::HashSet;

use thiserror::Error;

use crate::catalog::book::Book;
use crate::fetch::FETCH_FAILED_MESSAGE;

/// Errors raised by catalog construction and lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two records share an identifier, so detail lookup would be ambiguous.
    #[error("Book number {number} appears more than once in the catalog")]
    DuplicateNumber { number: u32 },

    /// Detail view requested for an identifier with no record.
    #[error("Book {number} not found")]
    BookNotFound { number: u32 },
}

impl CatalogError {
    /// Message shown to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            CatalogError::DuplicateNumber { .. } => FETCH_FAILED_MESSAGE,
            CatalogError::BookNotFound { .. } => "We can't find the book",
        }
    }
}

/// The full list of books fetched at startup.
///
/// Never mutated after construction. Every filtered view is derived from
/// `books()` afresh.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Builds a catalog, preserving order.
    ///
    /// Rejects duplicate identifiers.
    pub fn new(books: Vec<Book>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(books.len());
        for book in &books {
            if !seen.insert(book.number) {
                return Err(CatalogError::DuplicateNumber {
                    number: book.number,
                });
            }
        }
        Ok(Self { books })
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn find(&self, number: u32) -> Option<&Book> {
        self.books.iter().find(|book| book.number == number)
    }

    /// Like [`Catalog::find`], but reports a miss as an error.
    pub fn lookup(&self, number: u32) -> Result<&Book, CatalogError> {
        self.find(number)
            .ok_or(CatalogError::BookNotFound { number })
    }
}
