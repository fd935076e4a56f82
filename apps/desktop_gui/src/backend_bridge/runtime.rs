//! Backend worker: owns the tokio runtime and the gateway-backed
//! repositories, consumes queued commands, and answers with UI events.
//!
//! Fetch failures are terminal per request: they are logged and reported
//! as the zero-rows outcome, never surfaced raw and never retried.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use gateway::{Gateway, GatewaySettings};
use tracing::{error, warn};

use client_core::repo::{
    ArticleRepository, BookRepository, ContactRepository, GatewayContent, NewsRepository,
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, settings: GatewaySettings) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendStartupFailed(format!(
                    "falha ao iniciar o processo de dados: {err}"
                )));
                return;
            }
        };

        runtime.block_on(async move {
            // Gateway construction is the one startup precondition; when it
            // fails the worker reports once and exits, which the UI sees as
            // a disconnected command queue.
            let gateway = match Gateway::new(&settings) {
                Ok(gateway) => gateway,
                Err(err) => {
                    error!("gateway configuration rejected: {err}");
                    let _ = ui_tx.try_send(UiEvent::BackendStartupFailed(format!(
                        "o serviço de conteúdo não pôde ser configurado: {err}"
                    )));
                    return;
                }
            };
            let content = GatewayContent::new(gateway);
            let _ = ui_tx.try_send(UiEvent::BackendReady);

            // Each command runs as its own task so independently mounted
            // views can have requests outstanding at the same time.
            while let Ok(cmd) = cmd_rx.recv() {
                let content = content.clone();
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    handle_command(&content, &ui_tx, cmd).await;
                });
            }
        });
    });
}

async fn handle_command(content: &GatewayContent, ui_tx: &Sender<UiEvent>, cmd: BackendCommand) {
    match cmd {
        BackendCommand::LoadLatestNews { generation, limit } => {
            let rows = content.latest(limit).await.unwrap_or_else(|err| {
                warn!(error = %err, "failed to load latest news");
                Vec::new()
            });
            let _ = ui_tx.try_send(UiEvent::LatestNewsLoaded { generation, rows });
        }
        BackendCommand::LoadNews { generation } => {
            let rows = NewsRepository::list(content).await.unwrap_or_else(|err| {
                warn!(error = %err, "failed to load news list");
                Vec::new()
            });
            let _ = ui_tx.try_send(UiEvent::NewsLoaded { generation, rows });
        }
        BackendCommand::LoadNewsDetail { generation, slug } => {
            let row = match content.by_slug(&slug).await {
                Ok(row) => row,
                Err(err) => {
                    warn!(slug = %slug, error = %err, "failed to load news detail");
                    None
                }
            };
            let _ = ui_tx.try_send(UiEvent::NewsDetailLoaded { generation, row });
        }
        BackendCommand::LoadArticles {
            generation,
            category,
        } => {
            let rows = ArticleRepository::list(content, category)
                .await
                .unwrap_or_else(|err| {
                    warn!(category = category.as_str(), error = %err, "failed to load articles");
                    Vec::new()
                });
            let _ = ui_tx.try_send(UiEvent::ArticlesLoaded { generation, rows });
        }
        BackendCommand::LoadBooks { generation } => {
            let rows = BookRepository::list(content).await.unwrap_or_else(|err| {
                warn!(error = %err, "failed to load books");
                Vec::new()
            });
            let _ = ui_tx.try_send(UiEvent::BooksLoaded { generation, rows });
        }
        BackendCommand::SubmitContact { submission } => {
            let event = match content.submit(&submission).await {
                Ok(()) => UiEvent::ContactAccepted,
                Err(err) => {
                    error!(error = %err, "contact submission failed");
                    UiEvent::ContactFailed
                }
            };
            let _ = ui_tx.try_send(event);
        }
    }
}
