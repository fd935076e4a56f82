//! Application shell: persistent header/footer composed around whichever
//! page the current route resolves to.

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use egui::{Color32, RichText};

use client_core::nav::{NavigationController, View};
use client_core::view::{ContactForm, DetailView, ListView};
use shared::domain::{Article, Book, NewsPost};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::pages;

const WINE: Color32 = Color32::from_rgb(0x4b, 0x1e, 0x2f);
const GOLD: Color32 = Color32::from_rgb(0xc9, 0xa2, 0x27);

const HOME_NEWS_LIMIT: u32 = 3;

/// Fixed, ordered header menu: (label, destination). At most one entry is
/// highlighted per render, by exact match against the route's display path.
const MENU: [(&str, &str); 7] = [
    ("Início", "/"),
    ("Notícias", "/noticias"),
    ("Em Minhas Palavras", "/minhas-palavras"),
    ("Sobre Escrita", "/sobre-escrita"),
    ("Livros", "/livros"),
    ("Sobre", "/sobre"),
    ("Contato", "/contato"),
];

fn active_menu_entry(display_path: &str) -> Option<usize> {
    MENU.iter().position(|(_, path)| *path == display_path)
}

pub struct SiteApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    nav: NavigationController,
    mounted: Option<View>,
    pending_nav: Option<String>,
    startup_error: Option<String>,
    status: String,
    home_news: ListView<NewsPost>,
    news: ListView<NewsPost>,
    news_detail: DetailView<NewsPost>,
    articles: ListView<Article>,
    books: ListView<Book>,
    contact: ContactForm,
}

impl SiteApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            nav: NavigationController::new(),
            mounted: None,
            pending_nav: None,
            startup_error: None,
            status: String::new(),
            home_news: ListView::new(),
            news: ListView::new(),
            news_detail: DetailView::new(),
            articles: ListView::new(),
            books: ListView::new(),
            contact: ContactForm::new(),
        }
    }

    fn process_ui_events(&mut self) {
        loop {
            let event = match self.ui_rx.try_recv() {
                Ok(event) => event,
                Err(_) => break,
            };
            match event {
                UiEvent::BackendReady => {
                    self.status.clear();
                }
                UiEvent::BackendStartupFailed(message) => {
                    self.startup_error = Some(message);
                }
                UiEvent::LatestNewsLoaded { generation, rows } => {
                    self.home_news.complete(generation, rows);
                }
                UiEvent::NewsLoaded { generation, rows } => {
                    self.news.complete(generation, rows);
                }
                UiEvent::NewsDetailLoaded { generation, row } => {
                    self.news_detail.complete(generation, row);
                }
                UiEvent::ArticlesLoaded { generation, rows } => {
                    self.articles.complete(generation, rows);
                }
                UiEvent::BooksLoaded { generation, rows } => {
                    self.books.complete(generation, rows);
                }
                UiEvent::ContactAccepted => {
                    self.contact.complete(true);
                }
                UiEvent::ContactFailed => {
                    self.contact.complete(false);
                }
            }
        }
    }

    /// Issues exactly one load when the resolved page (or its slug
    /// parameter) changes. View equality covers the slug, so navigating
    /// between two detail pages remounts with a fresh request generation.
    fn ensure_mounted(&mut self) {
        let view = self.nav.current().view();
        if self.mounted.as_ref() == Some(&view) {
            return;
        }
        match &view {
            View::Home => {
                let generation = self.home_news.begin();
                dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::LoadLatestNews {
                        generation,
                        limit: HOME_NEWS_LIMIT,
                    },
                    &mut self.status,
                );
            }
            View::NewsList => {
                let generation = self.news.begin();
                dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::LoadNews { generation },
                    &mut self.status,
                );
            }
            View::NewsDetail { slug } => {
                let generation = self.news_detail.begin(slug);
                dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::LoadNewsDetail {
                        generation,
                        slug: slug.clone(),
                    },
                    &mut self.status,
                );
            }
            View::ArticleList { category } => {
                let generation = self.articles.begin();
                dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::LoadArticles {
                        generation,
                        category: *category,
                    },
                    &mut self.status,
                );
            }
            View::Books => {
                let generation = self.books.begin();
                dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::LoadBooks { generation },
                    &mut self.status,
                );
            }
            View::About | View::Contact => {}
        }
        self.mounted = Some(view);
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        let active = active_menu_entry(self.nav.current().display_path());
        let mut target: Option<String> = None;
        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::default().fill(WINE).inner_margin(egui::Margin::same(10)))
            .show(ctx, |ui| {
                ui.horizontal_wrapped(|ui| {
                    if ui
                        .button(RichText::new("Lizzie Oliver").size(22.0).color(GOLD))
                        .clicked()
                    {
                        target = Some("/".to_string());
                    }
                    ui.separator();
                    for (index, (label, path)) in MENU.iter().enumerate() {
                        let is_active = active == Some(index);
                        let text = if is_active {
                            RichText::new(*label).color(GOLD).strong()
                        } else {
                            RichText::new(*label).color(Color32::from_gray(0xe5))
                        };
                        if ui.selectable_label(is_active, text).clicked() {
                            target = Some((*path).to_string());
                        }
                    }
                });
            });
        if target.is_some() {
            self.pending_nav = target;
        }
    }

    fn show_footer(&mut self, ctx: &egui::Context) {
        let mut target: Option<String> = None;
        egui::TopBottomPanel::bottom("footer")
            .frame(egui::Frame::default().fill(Color32::BLACK).inner_margin(egui::Margin::same(8)))
            .show(ctx, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        RichText::new("Lizzie Oliver")
                            .color(GOLD)
                            .strong(),
                    );
                    ui.label(
                        RichText::new("Escritora de Fantasia – Semifinalista do Prêmio Jabuti")
                            .color(Color32::from_gray(0xe5)),
                    );
                    ui.separator();
                    if ui
                        .link(RichText::new("Contato").color(Color32::from_gray(0xe5)))
                        .clicked()
                    {
                        target = Some("/contato".to_string());
                    }
                    ui.hyperlink_to("@lizzieolivervs", "https://instagram.com/lizzieolivervs");
                    ui.separator();
                    ui.label(
                        RichText::new("© 2025 Lizzie Oliver – Todos os direitos reservados")
                            .color(Color32::from_gray(0xe5)),
                    );
                });
            });
        if target.is_some() {
            self.pending_nav = target;
        }
    }

    fn show_page(&mut self, ctx: &egui::Context) {
        let view = self.nav.current().view();
        let scroll_reset = self.nav.take_scroll_reset();
        let mut target: Option<String> = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(message) = &self.startup_error {
                ui.colored_label(Color32::from_rgb(0xb9, 0x1c, 0x1c), message);
                ui.separator();
            }
            if !self.status.is_empty() {
                ui.colored_label(Color32::from_rgb(0xb9, 0x1c, 0x1c), &self.status);
                ui.separator();
            }

            let mut scroll = egui::ScrollArea::vertical().auto_shrink([false, false]);
            if scroll_reset {
                scroll = scroll.vertical_scroll_offset(0.0);
            }
            scroll.show(ui, |ui| match &view {
                View::Home => pages::home(ui, self.home_news.state(), &mut target),
                View::NewsList => pages::news_list(ui, self.news.state(), &mut target),
                View::NewsDetail { .. } => {
                    pages::news_detail(ui, self.news_detail.state(), &mut target)
                }
                View::ArticleList { category } => {
                    pages::article_list(ui, *category, self.articles.state(), &mut target)
                }
                View::Books => pages::books(ui, self.books.state()),
                View::About => pages::about(ui),
                View::Contact => {
                    if let Some(submission) = pages::contact(ui, &mut self.contact) {
                        dispatch_backend_command(
                            &self.cmd_tx,
                            BackendCommand::SubmitContact { submission },
                            &mut self.status,
                        );
                    }
                }
            });
        });

        if target.is_some() {
            self.pending_nav = target;
        }
    }
}

impl eframe::App for SiteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        if let Some(destination) = self.pending_nav.take() {
            self.nav.navigate(&destination);
        }
        self.ensure_mounted();

        self.show_header(ctx);
        self.show_footer(ctx);
        self.show_page(ctx);

        // Backend events arrive without an input event to wake the UI.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_core::nav::Route;

    #[test]
    fn detail_routes_highlight_their_parent_list_entry() {
        let route = Route::parse("/noticias/lancamento-2025");
        let index = active_menu_entry(route.display_path()).expect("active entry");
        assert_eq!(MENU[index].1, "/noticias");
    }

    #[test]
    fn article_detail_routes_highlight_their_category_entry() {
        let route = Route::parse("/sobre-escrita/processo");
        let index = active_menu_entry(route.display_path()).expect("active entry");
        assert_eq!(MENU[index].1, "/sobre-escrita");
    }

    #[test]
    fn unknown_destinations_highlight_no_menu_entry() {
        let route = Route::parse("/leitores-jovens");
        assert!(active_menu_entry(route.display_path()).is_none());
    }

    #[test]
    fn matching_is_exact_not_prefix() {
        assert!(active_menu_entry("/noticias-antigas").is_none());
        assert_eq!(active_menu_entry("/"), Some(0));
    }
}
