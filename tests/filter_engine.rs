mod common;

use bookcase::catalog::Book;
use bookcase::filter::{apply_filters, compare_titles, distinct_years, FilterQuery, SortOption};
use common::{potter_books, sample_books};
use std::cmp::Ordering;

fn numbers(books: &[Book]) -> Vec<u32> {
    books.iter().map(|b| b.number).collect()
}

fn sort(value: &str) -> Option<SortOption> {
    Some(value.parse().expect("valid sort option"))
}

#[test]
fn release_date_asc_orders_chronologically() {
    let result = apply_filters(&sample_books(), &FilterQuery::new().sort(sort("releaseDate-asc")));
    assert_eq!(numbers(&result), vec![2, 1]);
}

#[test]
fn lowercase_search_matches_capitalised_title() {
    let result = apply_filters(&sample_books(), &FilterQuery::new().search("a"));
    assert_eq!(numbers(&result), vec![1]);
}

#[test]
fn every_result_contains_the_search_term() {
    let books = potter_books();
    for term in ["harry", "OF", "  fire ", "the c", "zzz"] {
        let query = FilterQuery::new().search(term);
        let needle = term.trim().to_lowercase();
        for book in apply_filters(&books, &query) {
            assert!(
                book.title_key().to_lowercase().contains(&needle),
                "{:?} does not contain {:?}",
                book.title,
                needle
            );
        }
    }
}

#[test]
fn empty_search_keeps_everything_in_order() {
    let books = potter_books();
    let result = apply_filters(&books, &FilterQuery::new().search("   "));
    assert_eq!(result, books);
}

#[test]
fn every_result_has_the_selected_year() {
    let books = potter_books();
    for year in distinct_years(&books) {
        let result = apply_filters(&books, &FilterQuery::new().year(Some(year)));
        assert!(!result.is_empty());
        assert!(result.iter().all(|b| b.release_year() == Some(year)));
    }
}

#[test]
fn year_without_books_yields_nothing() {
    let result = apply_filters(&potter_books(), &FilterQuery::new().year(Some(1850)));
    assert!(result.is_empty());
}

#[test]
fn no_year_returns_the_search_filtered_set() {
    let books = potter_books();
    let searched = apply_filters(&books, &FilterQuery::new().search("goblet"));
    let with_any_year = apply_filters(&books, &FilterQuery::new().search("goblet").year(None));
    assert_eq!(searched, with_any_year);
    assert_eq!(numbers(&searched), vec![4]);
}

#[test]
fn search_and_year_combine() {
    let books = potter_books();
    let query = FilterQuery::new().search("harry potter and the").year(Some(2005));
    assert_eq!(numbers(&apply_filters(&books, &query)), vec![6]);
}

#[test]
fn title_sorts_respect_adjacent_ordering() {
    let books = potter_books();
    let asc = apply_filters(&books, &FilterQuery::new().sort(sort("title-asc")));
    let desc = apply_filters(&books, &FilterQuery::new().sort(sort("title-desc")));

    for pair in asc.windows(2) {
        assert_ne!(
            compare_titles(pair[0].title_key(), pair[1].title_key()),
            Ordering::Greater
        );
    }
    for pair in desc.windows(2) {
        assert_ne!(
            compare_titles(pair[0].title_key(), pair[1].title_key()),
            Ordering::Less
        );
    }
    assert_eq!(asc.first().map(|b| b.number), Some(2)); // Chamber of Secrets
}

#[test]
fn date_sorts_respect_adjacent_ordering() {
    let books = potter_books();
    let asc = apply_filters(&books, &FilterQuery::new().sort(sort("releaseDate-asc")));
    let desc = apply_filters(&books, &FilterQuery::new().sort(sort("releaseDate-desc")));

    assert!(asc.windows(2).all(|p| p[0].release_day() <= p[1].release_day()));
    assert!(desc.windows(2).all(|p| p[0].release_day() >= p[1].release_day()));
    assert_eq!(numbers(&desc), vec![8, 7, 6, 5, 4, 3, 2, 1]);
}

#[test]
fn no_sort_keeps_catalog_order() {
    let mut books = potter_books();
    books.reverse();
    let result = apply_filters(&books, &FilterQuery::new().search("harry"));
    assert_eq!(numbers(&result), vec![8, 7, 6, 5, 4, 3, 2, 1]);
}

#[test]
fn filtering_never_compounds() {
    let books = potter_books();
    let narrow = apply_filters(&books, &FilterQuery::new().search("goblet"));
    assert_eq!(narrow.len(), 1);
    let widened = apply_filters(&books, &FilterQuery::new().search("harry"));
    assert_eq!(widened.len(), books.len());
}

#[test]
fn distinct_years_are_strictly_ascending() {
    let mut books = potter_books();
    books.extend(potter_books().into_iter().map(|mut b| {
        b.number += 100;
        b
    }));
    let years = distinct_years(&books);
    assert!(years.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(years, vec![1997, 1998, 1999, 2000, 2003, 2005, 2007, 2016]);
}

#[test]
fn unknown_sort_option_is_an_error() {
    let err = "pages-desc".parse::<SortOption>().unwrap_err();
    assert!(err.to_string().contains("pages-desc"));
}

#[test]
fn full_month_name_dates_filter_and_sort_by_year() {
    let books = vec![
        Book::new(1, "Spelled Out").with_release_date("July 8, 2000"),
        Book::new(2, "Abbreviated").with_release_date("Jun 26, 1997"),
        Book::new(3, "Undated"),
    ];

    assert_eq!(distinct_years(&books), vec![1997, 2000]);

    let in_2000 = apply_filters(&books, &FilterQuery::new().year(Some(2000)));
    assert_eq!(numbers(&in_2000), vec![1]);

    let desc = apply_filters(&books, &FilterQuery::new().sort(sort("releaseDate-desc")));
    assert_eq!(numbers(&desc), vec![1, 2, 3]);
}
