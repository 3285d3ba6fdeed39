//! Shared fixtures for integration tests.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use bookcase::catalog::{Book, Catalog};
use bookcase::config::{Config, DisplaySettings, SourceConfig};
use bookcase::ui::app::App;
use std::path::PathBuf;
use tempfile::TempDir;

/// The two-book catalog used throughout the scenarios.
pub fn sample_books() -> Vec<Book> {
    vec![
        Book::new(1, "Book A").with_release_date("2001-01-01"),
        Book::new(2, "Book B").with_release_date("1999-05-05"),
    ]
}

/// A larger catalog shaped like the real API's payload.
pub fn potter_books() -> Vec<Book> {
    serde_json::from_str(POTTER_JSON).expect("fixture should decode")
}

pub const POTTER_JSON: &str = r#"[
  {"number": 1, "title": "Harry Potter and the Sorcerer's Stone", "originalTitle": "Harry Potter and the Philosopher's Stone", "releaseDate": "Jun 26, 1997", "description": "On his birthday, Harry Potter discovers that he is the son of two well-known wizards.", "pages": 223, "cover": "https://example.com/1.png", "index": 0},
  {"number": 2, "title": "Harry Potter and the Chamber of Secrets", "originalTitle": "Harry Potter and the Chamber of Secrets", "releaseDate": "Jul 2, 1998", "description": "Harry Potter and the sophomores investigate a malevolent threat.", "pages": 251, "cover": "https://example.com/2.png", "index": 1},
  {"number": 3, "title": "Harry Potter and the Prisoner of Azkaban", "originalTitle": "Harry Potter and the Prisoner of Azkaban", "releaseDate": "Jul 8, 1999", "description": "Harry's third year of studies at Hogwarts is threatened by Sirius Black.", "pages": 317, "cover": "https://example.com/3.png", "index": 2},
  {"number": 4, "title": "Harry Potter and the Goblet of Fire", "originalTitle": "Harry Potter and the Goblet of Fire", "releaseDate": "Jul 8, 2000", "description": "Hogwarts prepares for the Triwizard Tournament.", "pages": 636, "cover": "https://example.com/4.png", "index": 3},
  {"number": 5, "title": "Harry Potter and the Order of the Phoenix", "originalTitle": "Harry Potter and the Order of the Phoenix", "releaseDate": "Jun 21, 2003", "description": "Harry Potter is preparing for his fifth year at Hogwarts.", "pages": 766, "cover": "https://example.com/5.png", "index": 4},
  {"number": 6, "title": "Harry Potter and the Half-Blood Prince", "originalTitle": "Harry Potter and the Half-Blood Prince", "releaseDate": "Jul 16, 2005", "description": "Voldemort is tightening his grip.", "pages": 607, "cover": "https://example.com/6.png", "index": 5},
  {"number": 7, "title": "Harry Potter and the Deathly Hallows", "originalTitle": "Harry Potter and the Deathly Hallows", "releaseDate": "Jul 21, 2007", "description": "Harry, Ron and Hermione hunt Horcruxes.", "pages": 607, "cover": "https://example.com/7.png", "index": 6},
  {"number": 8, "title": "Harry Potter and the Cursed Child", "originalTitle": "Harry Potter and the Cursed Child", "releaseDate": "Jul 30, 2016", "description": "Nineteen years later.", "pages": 336, "cover": "https://example.com/8.png", "index": 7}
]"#;

pub fn sample_catalog() -> Catalog {
    Catalog::new(sample_books()).expect("sample numbers are unique")
}

/// App that has already received `books` from the fetch.
pub fn loaded_app(books: Vec<Book>) -> App {
    let mut app = App::new(DisplaySettings::default());
    app.on_resize(120, 40);
    app.on_catalog_loaded(Ok(books));
    app
}

/// Config pointing at `url` with short timeouts.
pub fn config_for(url: &str) -> Config {
    Config {
        source: SourceConfig {
            url: url.to_string(),
            timeout_seconds: 2,
            connect_timeout_seconds: 1,
        },
        ..Config::default()
    }
}

/// Write `content` to a temporary config.toml.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
