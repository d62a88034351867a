use tracing::debug;

use crate::db::Database;
use crate::error::ApiError;
use crate::models::song::{CreateSong, Song, UpdateSong};

/// Inserts one song after checking all five required fields are present.
pub async fn create_song(database: &Database, body: CreateSong) -> Result<Song, ApiError> {
    debug!("Request body: {:?}", body);

    let Some((name, artist, album, poster, preview_url)) = body.require_all() else {
        return Err(ApiError::Validation("All fields are required".to_string()));
    };

    let song = database
        .insert_song(name, artist, album, poster, preview_url)
        .await?;
    Ok(song)
}

/// Applies a partial update covering only the fields present in the body.
pub async fn update_song(
    database: &Database,
    id: i32,
    body: UpdateSong,
) -> Result<Song, ApiError> {
    if body.fields().is_empty() {
        return Err(ApiError::Validation("No fields to update".to_string()));
    }

    database
        .update_song(id, &body)
        .await?
        .ok_or(ApiError::NotFound)
}

pub async fn delete_song(database: &Database, id: i32) -> Result<(), ApiError> {
    if database.delete_song(id).await? {
        Ok(())
    } else {
        Err(ApiError::NotFound)
    }
}

pub async fn list_songs(database: &Database) -> Result<Vec<Song>, ApiError> {
    Ok(database.list_songs().await?)
}
