use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode, Url};
use tracing::debug;

use crate::config::Config;
use crate::model::album::Album;
use crate::model::form::FormInput;
use crate::model::selection::Selection;
use crate::sync_error::SyncError;

/// How the server answered a DELETE; the response body is never read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    Failed(StatusCode),
}

impl From<StatusCode> for DeleteOutcome {
    fn from(status: StatusCode) -> Self {
        match status {
            StatusCode::OK => DeleteOutcome::Deleted,
            StatusCode::NOT_FOUND => DeleteOutcome::NotFound,
            other => DeleteOutcome::Failed(other),
        }
    }
}

#[derive(Clone)]
pub struct AlbumClient {
    inner: Client,
    albums_url: Url,
    lenient_status: bool,
}

impl AlbumClient {
    pub fn new(config: &Config) -> Result<AlbumClient, SyncError> {
        let inner = Client::builder().build()?;
        let albums_url = config.albums_url()?;

        Ok(AlbumClient {
            inner,
            albums_url,
            lenient_status: config.lenient_status,
        })
    }

    pub fn albums_url(&self) -> &Url {
        &self.albums_url
    }

    pub async fn create(&self, form: &FormInput) -> Result<json::Value, SyncError> {
        debug!(url = %self.albums_url, fields = form.fields().len(), "POST albums");
        let res = self
            .inner
            .post(self.albums_url.clone())
            .json(&form.to_json())
            .send()
            .await?;

        self.read_json(res).await
    }

    pub async fn list(&self) -> Result<Vec<Album>, SyncError> {
        debug!(url = %self.albums_url, "GET albums");
        let res = self
            .inner
            .get(self.albums_url.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .send()
            .await?;

        let body = self.read_json(res).await?;
        let albums = json::from_value(body).map_err(|err| SyncError::Decode(err.to_string()))?;
        Ok(albums)
    }

    pub async fn delete(&self, selection: &Selection) -> Result<DeleteOutcome, SyncError> {
        debug!(url = %self.albums_url, ids = selection.len(), "DELETE albums");
        let res = self
            .inner
            .delete(self.albums_url.clone())
            .json(&selection.delete_body())
            .send()
            .await?;

        Ok(DeleteOutcome::from(res.status()))
    }

    async fn read_json(&self, res: Response) -> Result<json::Value, SyncError> {
        let status = res.status();
        let body: json::Value = res.json().await?;

        if !self.lenient_status && !status.is_success() {
            return Err(SyncError::Status { status, body });
        }
        Ok(body)
    }
}
