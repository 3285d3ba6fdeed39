use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::catalog::Book;
use crate::filter::query::{FilterQuery, SortDirection, SortKey, SortOption};

/// Derives the displayed subset from the full list.
///
/// Search, then year, then an optional sort. The input is never reordered;
/// the result is a fresh vector.
pub fn apply_filters(books: &[Book], query: &FilterQuery) -> Vec<Book> {
    let term = query.normalized_search();

    let mut filtered: Vec<Book> = books
        .iter()
        .filter(|book| matches_search(book, &term))
        .filter(|book| matches_year(book, query.year))
        .cloned()
        .collect();

    if let Some(option) = query.sort {
        sort_books(&mut filtered, option);
    }

    filtered
}

/// Years of every parseable release date, deduplicated and ascending.
pub fn distinct_years(books: &[Book]) -> Vec<i32> {
    books
        .iter()
        .filter_map(Book::release_year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Sorts in place. Stable, so ties keep their incoming order.
pub fn sort_books(books: &mut [Book], option: SortOption) {
    books.sort_by(|a, b| compare_books(a, b, option));
}

pub fn compare_books(a: &Book, b: &Book, option: SortOption) -> Ordering {
    match option.key {
        SortKey::Title => {
            let ordering = compare_titles(a.title_key(), b.title_key());
            match option.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        }
        SortKey::ReleaseDate => match (a.release_day(), b.release_day()) {
            (Some(left), Some(right)) => match option.direction {
                SortDirection::Asc => left.cmp(&right),
                SortDirection::Desc => right.cmp(&left),
            },
            // Undated books go last in either direction.
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

/// Dictionary-style title comparison: case-insensitive first, and on
/// case-only ties lowercase sorts before uppercase.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

fn matches_search(book: &Book, term: &str) -> bool {
    term.is_empty() || book.title_key().to_lowercase().contains(term)
}

fn matches_year(book: &Book, year: Option<i32>) -> bool {
    match year {
        Some(year) => book.release_year() == Some(year),
        None => true,
    }
}
