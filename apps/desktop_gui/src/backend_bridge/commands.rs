//! Commands queued from the UI to the backend worker. Load commands carry
//! the issuing view's request generation so stale completions can be
//! dropped on the way back.

use shared::domain::{ArticleCategory, ContactSubmission};

pub enum BackendCommand {
    LoadLatestNews {
        generation: u64,
        limit: u32,
    },
    LoadNews {
        generation: u64,
    },
    LoadNewsDetail {
        generation: u64,
        slug: String,
    },
    LoadArticles {
        generation: u64,
        category: ArticleCategory,
    },
    LoadBooks {
        generation: u64,
    },
    SubmitContact {
        submission: ContactSubmission,
    },
}
