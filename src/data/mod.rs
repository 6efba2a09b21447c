//! Post data: the authored-post model and store, durable persistence, and
//! the compiled-in seed corpus.

pub mod persist;
pub mod seed;
pub mod store;
pub mod types;
