use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `songs` table. The id is generated by the store on insert.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Song {
    pub id: i32,
    pub name: String,
    pub artist: String,
    pub album: String,
    pub poster: String,
    pub preview_url: String,
}

/// Body of POST /songs. All five fields are required and must be non-empty.
#[derive(Debug, Deserialize)]
pub struct CreateSong {
    pub name: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub poster: Option<String>,
    pub preview_url: Option<String>,
}

fn present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|v| !v.is_empty())
}

impl CreateSong {
    /// Returns the five field values when all are present and non-empty.
    /// An empty string counts as missing, matching the required-field check
    /// applied on create.
    pub fn require_all(&self) -> Option<(&str, &str, &str, &str, &str)> {
        match (
            self.name.as_deref(),
            self.artist.as_deref(),
            self.album.as_deref(),
            self.poster.as_deref(),
            self.preview_url.as_deref(),
        ) {
            (Some(name), Some(artist), Some(album), Some(poster), Some(preview_url))
                if [name, artist, album, poster, preview_url]
                    .iter()
                    .all(|v| !v.is_empty()) =>
            {
                Some((name, artist, album, poster, preview_url))
            }
            _ => None,
        }
    }
}

/// Body of PUT /songs/{id}. Every field is optional; `album` is not updatable
/// in this contract.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSong {
    pub name: Option<String>,
    pub artist: Option<String>,
    pub preview_url: Option<String>,
    pub poster: Option<String>,
}

impl UpdateSong {
    /// The populated fields as (column, value) pairs, in the fixed precedence
    /// order name, artist, preview_url, poster. Empty strings are skipped the
    /// same way absent fields are, so the generated statement text is
    /// deterministic for a given field subset.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        let columns = [
            ("name", &self.name),
            ("artist", &self.artist),
            ("preview_url", &self.preview_url),
            ("poster", &self.poster),
        ];
        columns
            .into_iter()
            .filter(|(_, value)| present(value))
            .map(|(column, value)| (column, value.as_deref().unwrap_or_default()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_create() -> CreateSong {
        CreateSong {
            name: Some("Paranoid Android".to_string()),
            artist: Some("Radiohead".to_string()),
            album: Some("OK Computer".to_string()),
            poster: Some("https://example.com/okc.jpg".to_string()),
            preview_url: Some("https://example.com/okc.mp3".to_string()),
        }
    }

    #[test]
    fn create_accepts_five_populated_fields() {
        assert!(full_create().require_all().is_some());
    }

    #[test]
    fn create_rejects_missing_field() {
        let mut body = full_create();
        body.album = None;
        assert!(body.require_all().is_none());
    }

    #[test]
    fn create_rejects_empty_field() {
        let mut body = full_create();
        body.poster = Some(String::new());
        assert!(body.require_all().is_none());
    }

    #[test]
    fn update_fields_follow_fixed_order() {
        let body = UpdateSong {
            poster: Some("p".to_string()),
            name: Some("n".to_string()),
            artist: Some("a".to_string()),
            preview_url: Some("u".to_string()),
        };
        let columns: Vec<&str> = body.fields().into_iter().map(|(c, _)| c).collect();
        assert_eq!(columns, vec!["name", "artist", "preview_url", "poster"]);
    }

    #[test]
    fn update_skips_absent_and_empty_fields() {
        let body = UpdateSong {
            name: Some(String::new()),
            preview_url: Some("u".to_string()),
            ..Default::default()
        };
        assert_eq!(body.fields(), vec![("preview_url", "u")]);
    }

    #[test]
    fn update_with_no_fields_is_empty() {
        assert!(UpdateSong::default().fields().is_empty());
    }
}
