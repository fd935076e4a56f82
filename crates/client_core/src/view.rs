//! Per-page fetch state machines, kept free of any UI toolkit so the
//! contract from the shell's point of view is plain data: a page is either
//! loading, holds rows, or holds an explicit empty/not-found state.
//!
//! Each fetching view carries a request generation. Completions are tagged
//! with the generation that issued them and stale completions are dropped,
//! so a response for an old slug can never overwrite state for a newer one.

use shared::domain::ContactSubmission;

/// User-facing message for a failed contact submission. Generic on purpose;
/// raw gateway errors stay in the logs.
pub const CONTACT_ERROR_MESSAGE: &str =
    "Ocorreu um erro ao enviar sua mensagem. Por favor, tente novamente.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState<T> {
    Loading,
    /// An empty vec is the explicit zero-rows state, not an error.
    Loaded(Vec<T>),
}

/// Fetch state for a list page. One outstanding request at a time is
/// observed; completions from earlier requests are ignored.
#[derive(Debug)]
pub struct ListView<T> {
    state: ListState<T>,
    generation: u64,
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListView<T> {
    pub fn new() -> Self {
        Self {
            state: ListState::Loading,
            generation: 0,
        }
    }

    /// Starts a new request and returns its generation tag. The previous
    /// rows are dropped immediately; loading never shows stale data.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = ListState::Loading;
        self.generation
    }

    /// Applies a completion unless a newer request has been issued since.
    pub fn complete(&mut self, generation: u64, rows: Vec<T>) {
        if generation == self.generation {
            self.state = ListState::Loaded(rows);
        }
    }

    pub fn state(&self) -> &ListState<T> {
        &self.state
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState<T> {
    Loading,
    Found(T),
    NotFound,
}

/// Fetch state for a slug-keyed detail page. Changing the slug reissues the
/// request under a new generation, which is what guarantees the final
/// rendered state reflects the latest slug regardless of arrival order.
#[derive(Debug)]
pub struct DetailView<T> {
    slug: Option<String>,
    state: DetailState<T>,
    generation: u64,
}

impl<T> Default for DetailView<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DetailView<T> {
    pub fn new() -> Self {
        Self {
            slug: None,
            state: DetailState::Loading,
            generation: 0,
        }
    }

    /// True when this view is already showing or loading `slug`.
    pub fn is_current(&self, slug: &str) -> bool {
        self.slug.as_deref() == Some(slug)
    }

    pub fn begin(&mut self, slug: &str) -> u64 {
        self.generation += 1;
        self.slug = Some(slug.to_string());
        self.state = DetailState::Loading;
        self.generation
    }

    pub fn complete(&mut self, generation: u64, row: Option<T>) {
        if generation != self.generation {
            return;
        }
        self.state = match row {
            Some(value) => DetailState::Found(value),
            None => DetailState::NotFound,
        };
    }

    pub fn state(&self) -> &DetailState<T> {
        &self.state
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactPhase {
    Editing,
    Sending,
    Submitted,
    Failed(String),
}

/// Contact-form state machine. Exactly one write per user submit; success
/// clears the fields, failure preserves them behind a single retryable
/// message.
#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    phase: ContactPhase,
}

impl Default for ContactPhase {
    fn default() -> Self {
        ContactPhase::Editing
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &ContactPhase {
        &self.phase
    }

    pub fn is_sending(&self) -> bool {
        self.phase == ContactPhase::Sending
    }

    /// Moves into the sending phase and yields the payload to write, or
    /// `None` when a submit is already in flight.
    pub fn submit(&mut self) -> Option<ContactSubmission> {
        if self.is_sending() {
            return None;
        }
        self.phase = ContactPhase::Sending;
        Some(ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    pub fn complete(&mut self, accepted: bool) {
        if accepted {
            self.name.clear();
            self.email.clear();
            self.message.clear();
            self.phase = ContactPhase::Submitted;
        } else {
            self.phase = ContactPhase::Failed(CONTACT_ERROR_MESSAGE.to_string());
        }
    }

    /// "Send another message": back to an empty editable form.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
