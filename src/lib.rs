//! docbind - typed record access over schemaless document stores
//!
//! A document store holds loosely-typed key/value documents; application
//! code holds strongly-typed records. This crate is the conversion boundary
//! between the two: a [`codec::Codec`] pairs a decode and an encode function
//! for one record kind, and a [`handle::BoundHandle`] fixes one codec to one
//! collection so reads and writes through it never touch raw documents.

pub mod codec;
pub mod document;
pub mod handle;
pub mod store;
