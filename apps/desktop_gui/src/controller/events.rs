//! Events flowing from the backend worker to the UI thread. Loaded events
//! echo the request generation so view models can discard stale responses.

use shared::domain::{Article, Book, NewsPost};

pub enum UiEvent {
    BackendReady,
    /// Configuration precondition failed; shown once as a persistent banner.
    BackendStartupFailed(String),
    LatestNewsLoaded {
        generation: u64,
        rows: Vec<NewsPost>,
    },
    NewsLoaded {
        generation: u64,
        rows: Vec<NewsPost>,
    },
    NewsDetailLoaded {
        generation: u64,
        row: Option<NewsPost>,
    },
    ArticlesLoaded {
        generation: u64,
        rows: Vec<Article>,
    },
    BooksLoaded {
        generation: u64,
        rows: Vec<Book>,
    },
    ContactAccepted,
    ContactFailed,
}
