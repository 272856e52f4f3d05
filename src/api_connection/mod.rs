pub mod connection;
pub mod extractor;
pub mod nutrition;
