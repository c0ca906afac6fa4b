pub mod error;
pub mod model;
pub mod services;

pub use error::{PalabraError, Result};
pub use model::language::{Language, NUMBER_OF_LANGS};
pub use model::word::{WordEntry, UNTRANSLATED};
