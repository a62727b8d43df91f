//! file_server - minimal HTTP file server
//!
//! Serves one `GET` per connection from a root directory. Images are sent
//! verbatim; text files are sent with their template lines expanded.

pub mod config;
pub mod http;
pub mod server;
