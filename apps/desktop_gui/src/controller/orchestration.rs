//! Command orchestration from UI actions to the backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    let cmd_name = match &cmd {
        BackendCommand::LoadLatestNews { .. } => "load_latest_news",
        BackendCommand::LoadNews { .. } => "load_news",
        BackendCommand::LoadNewsDetail { .. } => "load_news_detail",
        BackendCommand::LoadArticles { .. } => "load_articles",
        BackendCommand::LoadBooks { .. } => "load_books",
        BackendCommand::SubmitContact { .. } => "submit_contact",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *status = "A fila de comandos está cheia; tente novamente.".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status =
                "O processo de dados foi encerrado; verifique a configuração do serviço de conteúdo."
                    .to_string();
        }
    }
}
