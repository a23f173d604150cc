pub mod app;
pub mod client;
pub mod config;
pub mod data;
pub mod deck;
pub mod error;
pub mod i18n;
pub mod ingest;
pub mod model;
pub mod pdf;
pub mod quiz;
pub mod speech;
pub mod ui;
pub mod view_models;

pub use app::StudyApp;
