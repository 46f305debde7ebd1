use crate::app::{action::Action, command::Command};
use crate::domain::console::ConsoleFacade;
use crate::domain::models::Approval;
use crate::domain::submission::CommandSubmitter;
use crate::infrastructure::markup;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

pub fn handle_command(
    command: Command,
    submitter: &CommandSubmitter,
    facade: Arc<dyn ConsoleFacade>,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    match command {
        Command::LoadPage(path) => {
            tokio::spawn(async move {
                match facade.page(&path).await {
                    Ok(html) => {
                        let content = markup::parse_page(&path, &html);
                        let _ = tx.send(Action::PageLoaded(path, content)).await;
                    }
                    Err(e) => {
                        tracing::warn!(%path, error = %e, "page load failed");
                        let _ = tx.send(Action::PageFailed(path, e.to_string())).await;
                    }
                }
            });
        }
        Command::Submit(text, guard) => {
            let submitter = submitter.clone();
            tokio::spawn(async move {
                // The guard is gone by the time the result is reported
                let result = submitter
                    .submit_with(guard, &text)
                    .await
                    .map_err(|e| e.to_string());
                let _ = tx.send(Action::SubmissionSettled(text, result)).await;
            });
        }
        Command::SetApproval { path, id, approval } => {
            tokio::spawn(async move {
                let result = facade
                    .set_approval(&path, &id, approval)
                    .await
                    .map(|()| match approval {
                        Approval::Approve => format!("Approved {id}"),
                        Approval::Unapprove => format!("Unapproved {id}"),
                    })
                    .map_err(|e| {
                        tracing::warn!(number = %id, error = %e, "approval update failed");
                        e.to_string()
                    });
                let _ = tx.send(Action::ApprovalSettled(result)).await;
            });
        }
    }
    Ok(())
}
