pub mod client;
pub mod schema;
pub mod worker;

#[cfg(test)]
mod test_support;

pub use client::{ContentClient, DEFAULT_API_BASE_URL};
pub use worker::{spawn_worker, ContentRequest, IoCommand, IoResult, PageContent};
