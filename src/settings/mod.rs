//! User settings for the welcome screen

pub mod store;

pub use store::WelcomeSettings;
