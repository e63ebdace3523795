//! Modules layer - Engines and adapters shared by the features
//!
//! Contains the catalog browsing engines, the storage adapter for the
//! relational backend, and the outbound messaging link builder.

pub mod browsing;
pub mod messaging;
pub mod storage;
