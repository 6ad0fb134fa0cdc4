pub mod enrich;
pub mod news;
pub mod quotes;
