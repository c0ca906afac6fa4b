use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PalabraError, Result};

/// Number of language slots a word carries.
pub const NUMBER_OF_LANGS: usize = 3;

/// A language slot of a [`WordEntry`](crate::WordEntry).
///
/// Spanish is the primary key; the remaining slots hold translations.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Es,
    En,
    Fr,
}

impl Language {
    /// All slots, in storage order.
    pub const ALL: [Language; NUMBER_OF_LANGS] = [Language::Es, Language::En, Language::Fr];

    /// Positional slot id: `Es = 0`, `En = 1`, `Fr = 2`.
    pub const fn index(self) -> usize {
        match self {
            Language::Es => 0,
            Language::En => 1,
            Language::Fr => 2,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    pub const fn is_primary(self) -> bool {
        matches!(self, Language::Es)
    }
}

impl TryFrom<usize> for Language {
    type Error = PalabraError;

    fn try_from(slot: usize) -> Result<Self> {
        Language::ALL
            .get(slot)
            .copied()
            .ok_or(PalabraError::UnknownSlot(slot))
    }
}

impl FromStr for Language {
    type Err = PalabraError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" => Ok(Language::Es),
            "en" => Ok(Language::En),
            "fr" => Ok(Language::Fr),
            _ => Err(PalabraError::UnknownLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
