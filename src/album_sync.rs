use tracing::{error, info, warn};

use crate::album_client::{AlbumClient, DeleteOutcome};
use crate::render::render_table;
use crate::sync_error::SyncError;
use crate::view::AlbumView;

pub const EMPTY_SELECTION_ALERT: &str = "Please select at least one item to delete.";
pub const CREATED_PREFIX: &str = "New Album Created: ";

/// Keeps a view's album table in line with the server. The view never holds
/// authoritative state; every mutation is followed by a full re-fetch.
pub struct AlbumListSync<V: AlbumView> {
    client: AlbumClient,
    view: V,
}

impl<V: AlbumView> AlbumListSync<V> {
    pub fn new(client: AlbumClient, view: V) -> Self {
        AlbumListSync { client, view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Posts the current form. On failure the form is left as typed.
    pub async fn submit_create(&mut self) -> Result<json::Value, SyncError> {
        let form = self.view.form_fields();

        let created = match self.client.create(&form).await {
            Ok(created) => created,
            Err(err) => {
                error!(%err, "failed to create album");
                return Err(err);
            }
        };

        info!(record = %created, "album created");
        self.view.show_response(&format!("{}{}", CREATED_PREFIX, created));
        self.view.reset_form();

        // a failed follow-up refresh is logged there and keeps the create a success
        let _ = self.refresh().await;

        Ok(created)
    }

    /// Re-fetches all albums and replaces the table; on failure the old table stays.
    pub async fn refresh(&mut self) -> Result<usize, SyncError> {
        let albums = match self.client.list().await {
            Ok(albums) => albums,
            Err(err) => {
                error!(%err, "failed to fetch album list");
                return Err(err);
            }
        };

        let projection = render_table(&albums);
        self.view.show_table(&projection);
        info!(rows = projection.row_count(), "album list refreshed");

        Ok(projection.row_count())
    }

    pub async fn delete_selected(&mut self) -> Result<DeleteOutcome, SyncError> {
        let selection = self.view.selection();
        if selection.is_empty() {
            self.view.alert(EMPTY_SELECTION_ALERT);
            return Err(SyncError::EmptySelection);
        }

        let outcome = match self.client.delete(&selection).await {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(%err, ids = ?selection.ids(), "delete request failed");
                return Err(err);
            }
        };

        match outcome {
            DeleteOutcome::Deleted => {
                info!(ids = ?selection.ids(), "Selected items deleted");
                let _ = self.refresh().await;
            }
            DeleteOutcome::NotFound => {
                warn!(ids = ?selection.ids(), "One or more items not found");
            }
            DeleteOutcome::Failed(status) => {
                error!(%status, "Error deleting selected items");
            }
        }

        Ok(outcome)
    }
}
