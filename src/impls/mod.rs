pub mod analyzer;
pub mod catalog;
pub mod errors;
pub mod listing;
pub mod pipeline;
pub mod store;
pub mod votes;
pub mod wizard;

#[cfg(test)]
pub mod testing;
