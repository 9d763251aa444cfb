//! Data models for the verb flashcards

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Person key (e.g. `he`, `you_f`) to inflected form, in source order
pub type ConjugationTable = IndexMap<String, String>;

/// A single vocabulary entry: a verb with its forms and usage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(default, deserialize_with = "null_as_default")]
    pub english: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub arabic: String,
    /// Derivation pattern label, e.g. "Form I"
    #[serde(default, deserialize_with = "null_as_default")]
    pub form: String,
    /// Latin transliteration
    #[serde(default, deserialize_with = "null_as_default")]
    pub pronunciation: String,
    /// Tense name to conjugation table
    #[serde(default, deserialize_with = "null_as_default")]
    pub conjugations: IndexMap<String, ConjugationTable>,
    /// Tense name to example sentences using that tense
    #[serde(default, deserialize_with = "null_as_default")]
    pub example_sentences: IndexMap<String, Vec<ExampleSentence>>,
}

impl Card {
    pub fn new(english: &str, arabic: &str, form: &str, pronunciation: &str) -> Self {
        Self {
            english: english.to_string(),
            arabic: arabic.to_string(),
            form: form.to_string(),
            pronunciation: pronunciation.to_string(),
            ..Default::default()
        }
    }
}

/// An example sentence in Arabic with its translation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExampleSentence {
    #[serde(default, deserialize_with = "null_as_default")]
    pub arabic: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub english: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pronunciation: String,
}

impl ExampleSentence {
    pub fn new(arabic: &str, english: &str, pronunciation: &str) -> Self {
        Self {
            arabic: arabic.to_string(),
            english: english.to_string(),
            pronunciation: pronunciation.to_string(),
        }
    }
}

/// On-disk data source: `{"verbs": [...]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerbFile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub verbs: Vec<Card>,
}

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
