//! Verb flashcards for verbcards
//!
//! This module provides:
//! - Card models (conjugation tables, example sentences)
//! - Loading cards from a JSON data file
//! - Built-in sample cards used when the data file is unavailable
//! - The card store and its navigation cursor

pub mod models;
pub mod sample;
pub mod storage;
pub mod store;

pub use models::*;
pub use storage::{load_cards, CardSourceError};
pub use store::{CardOrigin, CardStore, NavigationError};
