pub mod kinds;
pub mod play;
