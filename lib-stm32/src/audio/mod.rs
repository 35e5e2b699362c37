pub mod note;
pub mod songs;
pub mod tone_player;
pub mod tune;
