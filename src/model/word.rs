use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::language::{Language, NUMBER_OF_LANGS};
use crate::services::fingerprint;

/// Placeholder stored in a slot whose translation was never supplied.
pub const UNTRANSLATED: &str = "?";

const LABEL: &str = "Palabra";

fn default_untranslated() -> String {
    UNTRANSLATED.to_string()
}

/// A dictionary word with its translation in every [`Language`] slot.
///
/// Identity is the Spanish text: two entries are equal, and hash equally,
/// whenever their Spanish slots match exactly, whatever their translations.
/// The Spanish slot is fixed at construction.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(from = "WordRecord", into = "WordRecord")]
pub struct WordEntry {
    translations: [String; NUMBER_OF_LANGS],
}

impl WordEntry {
    /// Spanish and English only; French is left as [`UNTRANSLATED`].
    pub fn new(es: impl Into<String>, en: impl Into<String>) -> Self {
        Self::with_all(es, en, UNTRANSLATED)
    }

    pub fn with_all(es: impl Into<String>, en: impl Into<String>, fr: impl Into<String>) -> Self {
        Self {
            translations: [es.into(), en.into(), fr.into()],
        }
    }

    /// Every slot, ordered `[es, en, fr]`.
    pub fn translations(&self) -> &[String; NUMBER_OF_LANGS] {
        &self.translations
    }

    pub fn translation(&self, lang: Language) -> &str {
        &self.translations[lang.index()]
    }

    pub fn spanish(&self) -> &str {
        self.translation(Language::Es)
    }

    pub fn is_translated(&self, lang: Language) -> bool {
        self.translation(lang) != UNTRANSLATED
    }

    /// Overwrites the `lang` slot with `text`.
    ///
    /// Writes to the Spanish slot are ignored: it is the entry's key.
    pub fn set_translation(&mut self, text: impl Into<String>, lang: Language) {
        if lang.is_primary() {
            debug!(
                "ignoring write to primary slot of '{}'",
                self.translations[Language::Es.index()]
            );
            return;
        }

        let text = text.into();
        trace!("{} [{}] = '{}'", self.spanish(), lang, text);
        self.translations[lang.index()] = text;
    }

    /// Equality against an arbitrary value. Anything that is not a
    /// `WordEntry` compares unequal.
    pub fn equals_any(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<WordEntry>()
            .is_some_and(|w| w == self)
    }

    pub fn equals_opt(&self, other: Option<&WordEntry>) -> bool {
        other.is_some_and(|w| w == self)
    }

    /// Hex SHA-256 of the Spanish slot; consistent with `==`.
    pub fn fingerprint(&self) -> String {
        fingerprint::fingerprint(self.spanish())
    }
}

impl PartialEq for WordEntry {
    fn eq(&self, other: &Self) -> bool {
        self.spanish() == other.spanish()
    }
}

impl Eq for WordEntry {}

impl Hash for WordEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.spanish().hash(state);
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", LABEL, self.translations.join(", "))
    }
}

#[derive(Serialize, Deserialize)]
struct WordRecord {
    es: String,
    en: String,

    #[serde(default = "default_untranslated")]
    fr: String,
}

impl From<WordRecord> for WordEntry {
    fn from(r: WordRecord) -> Self {
        WordEntry::with_all(r.es, r.en, r.fr)
    }
}

impl From<WordEntry> for WordRecord {
    fn from(w: WordEntry) -> Self {
        let [es, en, fr] = w.translations;
        WordRecord { es, en, fr }
    }
}
