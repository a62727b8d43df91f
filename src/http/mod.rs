//! HTTP request handling.
//!
//! Every connection carries a single request and is closed afterwards. The
//! pipeline runs in a fixed order with no back-edges:
//!
//! ```text
//!   read_request ──► classify ──► resolve ──► write_header ──► write_body
//!   (parser)         (mime)       (resource)  (writer)         (content)
//! ```
//!
//! - **`connection`**: drives the pipeline for one accepted stream
//! - **`lines`**: splits a stream on `\n`, `\r` or `\r\n`
//! - **`parser`**: reads request lines and extracts the `GET` target
//! - **`request`**: the parsed request
//! - **`mime`**: content type from the path suffix
//! - **`resource`**: one-shot lookup of the target on disk
//! - **`response`**: status codes and the response head
//! - **`writer`**: writes the response head to the client
//! - **`content`**: streams the body, expanding template lines in text files
//!
//! A read or write failure on the stream aborts the remaining stages. A bad
//! request line or a missing file is not an error: both end in a 404.
//!
//! # Example
//!
//! ```ignore
//! use file_server::config::Config;
//! use file_server::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cfg = Config::load();
//!     let listener = TcpListener::bind(&cfg.listen_addr).await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let conn = Connection::new(socket, &cfg);
//!         tokio::spawn(async move {
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {:#}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod content;
pub mod lines;
pub mod mime;
pub mod parser;
pub mod request;
pub mod resource;
pub mod response;
pub mod writer;
