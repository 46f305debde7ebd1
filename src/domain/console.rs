use crate::domain::models::{Approval, CommandText, NumberId, ResponseText};
use crate::error::TransportError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConsoleFacade: Send + Sync {
    // GET /raw?body=<command>; any settled response is returned as text
    async fn raw(&self, command: &CommandText) -> Result<ResponseText, TransportError>;

    // Server-rendered page at `path`, as markup
    async fn page(&self, path: &str) -> Result<String, TransportError>;

    // POST <path>/<id>/approve|unapprove
    async fn set_approval(
        &self,
        path: &str,
        id: &NumberId,
        approval: Approval,
    ) -> Result<(), TransportError>;

    fn base_url(&self) -> String;
}
