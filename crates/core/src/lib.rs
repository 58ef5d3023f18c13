//! Product mirroring between a relational source and a document store.

pub mod document;
pub mod error;
pub mod events;
pub mod mutation;
pub mod presentation;
pub mod resolver;
pub mod schema;
pub mod seo;
pub mod store;
pub mod sync;

pub use error::{Error, Result};
