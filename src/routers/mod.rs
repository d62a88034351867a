pub mod root;
pub mod song;
pub use root::{health_check_route, root_route};
pub use song::{create_song_route, delete_song_route, list_songs_route, update_song_route};
