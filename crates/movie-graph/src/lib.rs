//! A small GraphQL API over two flat-file-backed collections, users and
//! movies. Queries filter and relate the collections; mutations apply
//! synchronous read-modify-persist cycles over the user collection.

pub mod filter;
pub mod mutations;
pub mod query;
pub mod relations;
pub mod schema;
pub mod state;
pub mod store;
pub mod types;
