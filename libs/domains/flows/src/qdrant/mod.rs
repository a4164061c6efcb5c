//! Qdrant-backed implementation of the [`VectorIndex`] trait.
//!
//! [`VectorIndex`]: crate::repository::VectorIndex

pub mod client;
pub mod config;

pub use client::QdrantIndex;
pub use config::QdrantConfig;
