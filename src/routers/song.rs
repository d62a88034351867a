use axum::extract::{Json, Path, State};
use axum::http::StatusCode;

use crate::controllers;
use crate::db::Database;
use crate::error::ApiError;
use crate::models::song::{CreateSong, Song, UpdateSong};

pub async fn create_song_route(
    State(database): State<Database>,
    Json(body): Json<CreateSong>,
) -> Result<(StatusCode, Json<Song>), ApiError> {
    let song = controllers::song::create_song(&database, body).await?;
    Ok((StatusCode::CREATED, Json(song)))
}

pub async fn update_song_route(
    State(database): State<Database>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateSong>,
) -> Result<Json<Song>, ApiError> {
    let song = controllers::song::update_song(&database, id, body).await?;
    Ok(Json(song))
}

pub async fn delete_song_route(
    State(database): State<Database>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    controllers::song::delete_song(&database, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_songs_route(
    State(database): State<Database>,
) -> Result<Json<Vec<Song>>, ApiError> {
    let songs = controllers::song::list_songs(&database).await?;
    Ok(Json(songs))
}
