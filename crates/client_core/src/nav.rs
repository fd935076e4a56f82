//! Navigation state: destination strings become canonical routes through an
//! ordered first-match table, and exactly one route is current at a time.

use shared::domain::ArticleCategory;

/// List-page destination for an article category; also its menu entry.
pub fn category_list_path(category: ArticleCategory) -> &'static str {
    match category {
        ArticleCategory::MinhasPalavras => "/minhas-palavras",
        ArticleCategory::SobreEscrita => "/sobre-escrita",
    }
}

/// Canonical description of what is currently displayed. Closed set; a
/// parameterized variant always carries its slug by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    NewsList,
    NewsDetail { slug: String },
    ArticleList { category: ArticleCategory },
    ArticleDetail { category: ArticleCategory, slug: String },
    BookList,
    About,
    Contact,
    /// Unrecognized literal destination. Resolves to the home view.
    Other(String),
}

impl Route {
    /// Translates a free-form destination string into a route. Total: any
    /// input yields a route, parameterized patterns first, first match wins.
    /// A parameterized pattern only matches a non-empty trailing segment.
    pub fn parse(destination: &str) -> Route {
        let patterns: [(&str, fn(String) -> Route); 3] = [
            ("/noticias/", |slug| Route::NewsDetail { slug }),
            ("/minhas-palavras/", |slug| Route::ArticleDetail {
                category: ArticleCategory::MinhasPalavras,
                slug,
            }),
            ("/sobre-escrita/", |slug| Route::ArticleDetail {
                category: ArticleCategory::SobreEscrita,
                slug,
            }),
        ];
        for (prefix, build) in patterns {
            if let Some(rest) = destination.strip_prefix(prefix) {
                if !rest.is_empty() {
                    return build(rest.to_string());
                }
            }
        }

        match destination {
            "/" => Route::Home,
            "/noticias" => Route::NewsList,
            "/minhas-palavras" => Route::ArticleList {
                category: ArticleCategory::MinhasPalavras,
            },
            "/sobre-escrita" => Route::ArticleList {
                category: ArticleCategory::SobreEscrita,
            },
            "/livros" => Route::BookList,
            "/sobre" => Route::About,
            "/contato" => Route::Contact,
            other => Route::Other(other.to_string()),
        }
    }

    /// Pure, total view selection. Routes outside the mountable set
    /// (article detail, unknown literals) fall back to the home view; a
    /// resolution miss is never an error.
    pub fn view(&self) -> View {
        match self {
            Route::NewsList => View::NewsList,
            Route::NewsDetail { slug } => View::NewsDetail { slug: slug.clone() },
            Route::ArticleList { category } => View::ArticleList {
                category: *category,
            },
            Route::BookList => View::Books,
            Route::About => View::About,
            Route::Contact => View::Contact,
            Route::Home | Route::ArticleDetail { .. } | Route::Other(_) => View::Home,
        }
    }

    /// The route's path with any parameter suffix stripped, used only for
    /// exact-match menu highlighting. Identity on unparameterized routes.
    pub fn display_path(&self) -> &str {
        match self {
            Route::Home => "/",
            Route::NewsList | Route::NewsDetail { .. } => "/noticias",
            Route::ArticleList { category } | Route::ArticleDetail { category, .. } => {
                category_list_path(*category)
            }
            Route::BookList => "/livros",
            Route::About => "/sobre",
            Route::Contact => "/contato",
            Route::Other(path) => path,
        }
    }
}

/// The closed set of mountable pages the shell can render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Home,
    NewsList,
    NewsDetail { slug: String },
    ArticleList { category: ArticleCategory },
    Books,
    About,
    Contact,
}

/// Single owner of the current route. Replacement is atomic from any
/// reader's perspective: the controller hands out an immutable borrow per
/// render and swaps the whole value on navigation. No history is kept.
#[derive(Debug)]
pub struct NavigationController {
    current: Route,
    scroll_reset: bool,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationController {
    pub fn new() -> Self {
        Self {
            current: Route::Home,
            scroll_reset: false,
        }
    }

    /// Replaces the current route and schedules a viewport scroll reset.
    /// Never fails; unrecognized destinations resolve to home at view
    /// selection, not here.
    pub fn navigate(&mut self, destination: &str) {
        self.current = Route::parse(destination);
        self.scroll_reset = true;
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Fire-and-forget: true exactly once after each navigation. The shell
    /// consumes it when it forces the scroll offset back to the top.
    pub fn take_scroll_reset(&mut self) -> bool {
        std::mem::take(&mut self.scroll_reset)
    }
}

#[cfg(test)]
#[path = "tests/nav_tests.rs"]
mod tests;
