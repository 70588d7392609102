//! Core library for Quill - models, storage, filtering, and export
//!
//! State lives in memory as flat category and note collections and persists
//! as JSON blobs in a key-value store. The [`notebook::Notebook`] repository
//! owns both and writes through on every mutation; [`filter`] derives the
//! list views; [`export`] renders notes as plain text or PDF.

pub mod error;
pub mod export;
pub mod filter;
pub mod migrate;
pub mod models;
pub mod notebook;
pub mod store;

pub use error::{Error, Result};
pub use notebook::{MoveTarget, Notebook};
