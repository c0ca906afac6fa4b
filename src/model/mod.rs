pub mod language;
pub mod word;
