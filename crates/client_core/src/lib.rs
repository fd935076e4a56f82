//! Client-side core for the author site: navigation state, repository
//! seams over the remote content gateway, and the headless per-page fetch
//! state machines the shell renders from.

pub mod nav;
pub mod repo;
pub mod view;

pub use nav::{NavigationController, Route, View};
pub use repo::{
    ArticleRepository, BookRepository, ContactRepository, GatewayContent, NewsRepository,
};
pub use view::{ContactForm, ContactPhase, DetailState, DetailView, ListState, ListView};
