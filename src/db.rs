use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::models::song::{Song, UpdateSong};

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

/// Statement text for a partial update. `fields` must be non-empty; the
/// caller has already rejected empty updates with a 400.
fn update_statement(fields: &[(&'static str, &str)]) -> String {
    let assignments: Vec<String> = fields
        .iter()
        .enumerate()
        .map(|(i, (column, _))| format!("{} = ${}", column, i + 1))
        .collect();
    format!(
        "UPDATE songs SET {} WHERE id = ${} RETURNING *",
        assignments.join(", "),
        fields.len() + 1
    )
}

impl Database {
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert_song(
        &self,
        name: &str,
        artist: &str,
        album: &str,
        poster: &str,
        preview_url: &str,
    ) -> Result<Song, sqlx::Error> {
        sqlx::query_as::<_, Song>(
            "INSERT INTO songs (name, artist, album, poster, preview_url) VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(name)
        .bind(artist)
        .bind(album)
        .bind(poster)
        .bind(preview_url)
        .fetch_one(&self.pool)
        .await
    }

    /// Updates only the populated fields of `update`, in their fixed order.
    /// Returns `None` when no row matched `id`.
    pub async fn update_song(
        &self,
        id: i32,
        update: &UpdateSong,
    ) -> Result<Option<Song>, sqlx::Error> {
        let fields = update.fields();
        let statement = update_statement(&fields);

        let mut query = sqlx::query_as::<_, Song>(&statement);
        for (_, value) in &fields {
            query = query.bind(*value);
        }
        query.bind(id).fetch_optional(&self.pool).await
    }

    /// Returns whether a row was deleted.
    pub async fn delete_song(&self, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM songs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// All rows, in store order. No pagination.
    pub async fn list_songs(&self) -> Result<Vec<Song>, sqlx::Error> {
        sqlx::query_as::<_, Song>("SELECT * FROM songs")
            .fetch_all(&self.pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_statement_covers_all_four_fields() {
        let fields = [
            ("name", "n"),
            ("artist", "a"),
            ("preview_url", "u"),
            ("poster", "p"),
        ];
        assert_eq!(
            update_statement(&fields),
            "UPDATE songs SET name = $1, artist = $2, preview_url = $3, poster = $4 WHERE id = $5 RETURNING *",
        );
    }

    #[test]
    fn update_statement_for_single_field() {
        let fields = [("poster", "p")];
        assert_eq!(
            update_statement(&fields),
            "UPDATE songs SET poster = $1 WHERE id = $2 RETURNING *",
        );
    }
}
