//! Reading the verb data source
//!
//! The data file is a JSON object with the card list under `verbs`:
//! ```text
//! {
//!   "verbs": [
//!     { "english": "to write", "arabic": "كَتَبَ", "conjugations": { ... } },
//!     ...
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::models::*;

#[derive(Error, Debug)]
pub enum CardSourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data file not found: {0}")]
    NotFound(PathBuf),

    #[error("Data file is not a JSON object")]
    NotAnObject,
}

pub type Result<T> = std::result::Result<T, CardSourceError>;

/// Load the card list from a data file
pub fn load_cards(path: &Path) -> Result<Vec<Card>> {
    if !path.exists() {
        return Err(CardSourceError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    parse_cards(&content)
}

/// Parse the card list from the contents of a data file
pub fn parse_cards(content: &str) -> Result<Vec<Card>> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    if !value.is_object() {
        return Err(CardSourceError::NotAnObject);
    }

    let file: VerbFile = serde_json::from_value(value)?;
    Ok(file.verbs)
}
