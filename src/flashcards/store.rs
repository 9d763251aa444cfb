//! Card collection with a single navigation cursor
//!
//! The cursor is 0-based internally and always a valid index while the
//! collection is non-empty. Positions exposed to callers are 1-based.

use std::path::Path;

use thiserror::Error;

use super::models::Card;
use super::sample::sample_cards;
use super::storage::load_cards;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    #[error("No cards available")]
    EmptyCollection,

    #[error("Invalid card number {requested} (expected 1..={total})")]
    InvalidPosition { requested: i64, total: usize },
}

/// Where the loaded collection came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardOrigin {
    Loaded,
    Sample,
}

pub struct CardStore {
    cards: Vec<Card>,
    cursor: usize,
    origin: CardOrigin,
}

impl CardStore {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            cursor: 0,
            origin: CardOrigin::Loaded,
        }
    }

    /// Load cards from a data file, falling back to the built-in sample set
    /// when the file is missing or unreadable.
    pub fn load(path: &Path) -> Self {
        match load_cards(path) {
            Ok(cards) => {
                log::info!("Loaded {} flashcards from {:?}", cards.len(), path);
                Self::new(cards)
            }
            Err(e) => {
                log::warn!("Could not load flashcards from {:?}: {}. Using sample data.", path, e);
                Self {
                    cards: sample_cards(),
                    cursor: 0,
                    origin: CardOrigin::Sample,
                }
            }
        }
    }

    pub fn origin(&self) -> CardOrigin {
        self.origin
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// 1-based cursor position, 0 when there are no cards
    pub fn position(&self) -> usize {
        if self.cards.is_empty() {
            0
        } else {
            self.cursor + 1
        }
    }

    pub fn current(&self) -> Result<&Card, NavigationError> {
        self.cards
            .get(self.cursor)
            .ok_or(NavigationError::EmptyCollection)
    }

    /// Move forward one card, wrapping from the last to the first
    pub fn advance(&mut self) -> Result<&Card, NavigationError> {
        let len = self.non_empty_len()?;
        self.cursor = (self.cursor + 1) % len;
        self.current()
    }

    /// Move back one card, wrapping from the first to the last
    pub fn retreat(&mut self) -> Result<&Card, NavigationError> {
        let len = self.non_empty_len()?;
        self.cursor = (self.cursor + len - 1) % len;
        self.current()
    }

    pub fn jump_to_first(&mut self) -> Result<&Card, NavigationError> {
        self.non_empty_len()?;
        self.cursor = 0;
        self.current()
    }

    pub fn jump_to_last(&mut self) -> Result<&Card, NavigationError> {
        let len = self.non_empty_len()?;
        self.cursor = len - 1;
        self.current()
    }

    /// Jump to a 1-based card number. The cursor is left alone when the
    /// number is out of range or there are no cards.
    pub fn jump_to(&mut self, number: i64) -> Result<&Card, NavigationError> {
        let total = self.cards.len();
        let index = usize::try_from(number)
            .ok()
            .filter(|n| (1..=total).contains(n))
            .map(|n| n - 1)
            .ok_or(NavigationError::InvalidPosition {
                requested: number,
                total,
            })?;

        self.cursor = index;
        self.current()
    }

    fn non_empty_len(&self) -> Result<usize, NavigationError> {
        match self.cards.len() {
            0 => Err(NavigationError::EmptyCollection),
            len => Ok(len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn store_of(len: usize) -> CardStore {
        let cards = (1..=len)
            .map(|i| Card::new(&format!("verb {}", i), "", "", ""))
            .collect();
        CardStore::new(cards)
    }

    #[test]
    fn test_advance_wraps() {
        let mut store = store_of(3);
        assert_eq!(store.position(), 1);

        let card = store.advance().unwrap();
        assert_eq!(card.english, "verb 2");
        assert_eq!(store.position(), 2);

        store.advance().unwrap();
        store.advance().unwrap();
        assert_eq!(store.position(), 1);
    }

    #[test]
    fn test_advance_cycle_returns_to_start() {
        for len in 1..=7 {
            let mut store = store_of(len);
            store.jump_to((len as i64 + 1) / 2).unwrap();
            let start = store.position();
            for _ in 0..len {
                store.advance().unwrap();
            }
            assert_eq!(store.position(), start);
        }
    }

    #[test]
    fn test_retreat_wraps() {
        let mut store = store_of(3);
        let card = store.retreat().unwrap();
        assert_eq!(card.english, "verb 3");
        assert_eq!(store.position(), 3);
    }

    #[test]
    fn test_retreat_inverts_advance() {
        let mut store = store_of(4);
        for number in 1..=4 {
            store.jump_to(number).unwrap();

            store.advance().unwrap();
            store.retreat().unwrap();
            assert_eq!(store.position(), number as usize);

            store.retreat().unwrap();
            store.advance().unwrap();
            assert_eq!(store.position(), number as usize);
        }
    }

    #[test]
    fn test_single_card_wraps_to_itself() {
        let mut store = store_of(1);
        assert_eq!(store.advance().unwrap().english, "verb 1");
        assert_eq!(store.retreat().unwrap().english, "verb 1");
        assert_eq!(store.position(), 1);
    }

    #[test]
    fn test_first_and_last() {
        let mut store = store_of(5);
        assert_eq!(store.jump_to_last().unwrap().english, "verb 5");
        assert_eq!(store.position(), 5);
        assert_eq!(store.jump_to_first().unwrap().english, "verb 1");
        assert_eq!(store.position(), 1);
    }

    #[test]
    fn test_jump_to_valid() {
        let mut store = store_of(5);
        for number in 1..=5 {
            let card = store.jump_to(number).unwrap();
            assert_eq!(card.english, format!("verb {}", number));
            assert_eq!(store.position(), number as usize);
        }
    }

    #[test]
    fn test_jump_to_invalid_keeps_cursor() {
        let mut store = store_of(3);
        store.jump_to(2).unwrap();

        for number in [0, -1, 4, 5, i64::MAX, i64::MIN] {
            let result = store.jump_to(number);
            assert_eq!(
                result.unwrap_err(),
                NavigationError::InvalidPosition {
                    requested: number,
                    total: 3
                }
            );
            assert_eq!(store.position(), 2);
        }
    }

    #[test]
    fn test_empty_store() {
        let mut store = CardStore::new(Vec::new());
        assert_eq!(store.size(), 0);
        assert_eq!(store.position(), 0);
        assert!(store.is_empty());

        assert_eq!(store.current().unwrap_err(), NavigationError::EmptyCollection);
        assert_eq!(store.advance().unwrap_err(), NavigationError::EmptyCollection);
        assert_eq!(store.retreat().unwrap_err(), NavigationError::EmptyCollection);
        assert_eq!(store.jump_to_first().unwrap_err(), NavigationError::EmptyCollection);
        assert_eq!(store.jump_to_last().unwrap_err(), NavigationError::EmptyCollection);
        assert_eq!(
            store.jump_to(1).unwrap_err(),
            NavigationError::InvalidPosition {
                requested: 1,
                total: 0
            }
        );
        assert_eq!(store.position(), 0);
    }

    #[test]
    fn test_load_falls_back_to_sample() {
        let temp = TempDir::new().unwrap();

        let missing = CardStore::load(&temp.path().join("absent.json"));
        assert_eq!(missing.origin(), CardOrigin::Sample);
        assert_eq!(missing.size(), 3);
        assert_eq!(missing.position(), 1);

        let broken_path = temp.path().join("broken.json");
        fs::write(&broken_path, "not json").unwrap();
        let broken = CardStore::load(&broken_path);
        assert_eq!(broken.origin(), CardOrigin::Sample);
        assert_eq!(broken.cards(), sample_cards().as_slice());
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("verbs.json");
        fs::write(&path, r#"{"verbs": [{"english": "to go"}]}"#).unwrap();

        let store = CardStore::load(&path);
        assert_eq!(store.origin(), CardOrigin::Loaded);
        assert_eq!(store.size(), 1);
        assert_eq!(store.current().unwrap().english, "to go");
    }

    #[test]
    fn test_load_file_without_verbs_is_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("verbs.json");
        fs::write(&path, "{}").unwrap();

        let store = CardStore::load(&path);
        assert_eq!(store.origin(), CardOrigin::Loaded);
        assert!(store.is_empty());
    }
}
