pub mod flashcards;
pub mod loading;
pub mod quiz;
pub mod summary;
pub mod upload;
