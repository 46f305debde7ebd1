use crate::domain::{
    console::ConsoleFacade,
    models::{Approval, CommandText, NumberId, ResponseText},
};
use crate::error::TransportError;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("textabus-console/", env!("CARGO_PKG_VERSION"));

/// Basic auth credentials for the server's admin pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct HttpSettings {
    pub credentials: Option<Credentials>,
    pub connect_timeout: Option<Duration>,
}

/// Talks to a running textabus server over plain HTTP.
pub struct HttpAdapter {
    client: Client,
    base: Url,
    credentials: Option<Credentials>,
}

impl HttpAdapter {
    pub fn new(base_url: &str, settings: HttpSettings) -> Result<Self, TransportError> {
        let mut base = Url::parse(base_url)
            .map_err(|e| TransportError::InvalidUrl(base_url.to_string(), e))?;
        // Relative joins replace the last segment unless the path is a directory
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base,
            credentials: settings.credentials,
        })
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, TransportError> {
        let relative = path.trim_start_matches('/');
        self.base
            .join(relative)
            .map_err(|e| TransportError::InvalidUrl(path.to_string(), e))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.credentials {
            Some(c) => request.basic_auth(&c.username, c.password.as_ref()),
            None => request,
        }
    }

    async fn read_text(response: Response) -> Result<String, TransportError> {
        let status = response.status();
        let url = response.url().clone();
        let text = response.text().await?;
        tracing::debug!(%url, %status, bytes = text.len(), "response settled");
        Ok(text)
    }
}

#[async_trait]
impl ConsoleFacade for HttpAdapter {
    async fn raw(&self, command: &CommandText) -> Result<ResponseText, TransportError> {
        let url = self.endpoint("raw")?;
        let response = self
            .authorize(self.client.get(url))
            .query(&[("body", command.as_str())])
            .send()
            .await?;
        Ok(ResponseText(Self::read_text(response).await?))
    }

    async fn page(&self, path: &str) -> Result<String, TransportError> {
        let url = self.endpoint(path)?;
        let response = self.authorize(self.client.get(url)).send().await?;
        Self::read_text(response).await
    }

    async fn set_approval(
        &self,
        path: &str,
        id: &NumberId,
        approval: Approval,
    ) -> Result<(), TransportError> {
        let mut url = self.endpoint(path)?;
        url.path_segments_mut()
            .map_err(|_| TransportError::Other(format!("{path} cannot take path segments")))?
            .pop_if_empty()
            .push(&id.0)
            .push(approval.path_segment());

        tracing::info!(%url, number = %id, "updating approval");
        let response = self.authorize(self.client.post(url)).send().await?;
        Self::read_text(response).await?;
        Ok(())
    }

    fn base_url(&self) -> String {
        self.base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_keeps_base_prefix() {
        let adapter = HttpAdapter::new("http://localhost:1312/textabus", HttpSettings::default())
            .unwrap();
        assert_eq!(
            adapter.endpoint("/raw").unwrap().as_str(),
            "http://localhost:1312/textabus/raw"
        );
        assert_eq!(
            adapter.endpoint("/admin/numbers").unwrap().as_str(),
            "http://localhost:1312/textabus/admin/numbers"
        );
        assert_eq!(adapter.base_url(), "http://localhost:1312/textabus/");
    }

    #[test]
    fn test_invalid_base_url_is_reported() {
        let err = HttpAdapter::new("not a url", HttpSettings::default())
            .err()
            .unwrap();
        assert!(matches!(err, TransportError::InvalidUrl(..)));
    }
}
