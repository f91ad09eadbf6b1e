//! HTTP request handlers organized by functionality

pub mod catalog;

pub use catalog::list_media_handler;
