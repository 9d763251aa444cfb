pub mod config;
pub mod flashcards;
pub mod server;
