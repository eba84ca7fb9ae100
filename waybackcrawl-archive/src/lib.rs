pub mod client;
pub mod error;

pub use client::ArchiveClient;
pub use error::FetchError;
