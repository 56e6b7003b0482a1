pub mod language;
pub mod translation;
