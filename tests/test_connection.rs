//! End-to-end tests of one request over an in-memory stream.

mod common;

use common::{Fixture, is_timestamp};
use file_server::config::Config;
use file_server::http::connection::Connection;
use file_server::http::content::{NOT_FOUND_BODY, SERVER_SIGNATURE};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

fn config_for(fx: &Fixture) -> Config {
    Config {
        root_dir: fx.path().to_path_buf(),
        idle_timeout_secs: 1,
        ..Config::default()
    }
}

/// Sends `request`, runs the connection to completion and returns
/// everything the server wrote.
async fn exchange(cfg: &Config, request: &[u8]) -> Vec<u8> {
    let (mut client, server) = tokio::io::duplex(64 * 1024);
    client.write_all(request).await.unwrap();

    Connection::new(server, cfg).run().await.unwrap();

    let mut out = Vec::new();
    client.read_to_end(&mut out).await.unwrap();
    out
}

fn split_response(raw: &[u8]) -> (String, Vec<u8>) {
    let pos = raw
        .windows(2)
        .position(|w| w == b"\n\n")
        .expect("header terminator");
    let head = String::from_utf8(raw[..pos].to_vec()).unwrap();
    (head, raw[pos + 2..].to_vec())
}

#[tokio::test]
async fn test_serves_html_with_date_token() {
    let fx = Fixture::new("conn_html");
    fx.write("index.html", b"<html>\n<cs371date>\n</html>\n");
    let cfg = config_for(&fx);

    let raw = exchange(&cfg, b"GET /index.html HTTP/1.1\r\nHost: localhost\r\n\r\n").await;
    let (head, body) = split_response(&raw);
    let body = String::from_utf8(body).unwrap();

    assert!(head.starts_with("HTTP/1.1 200 OK\n"));
    assert!(head.contains("\nConnection: close\n"));
    assert!(head.ends_with("Content-Type: text/html"));

    let rest = body.strip_prefix("<html>").unwrap();
    let (stamp, rest) = rest.split_at(17);
    assert!(is_timestamp(stamp), "bad timestamp {:?}", stamp);
    assert_eq!(rest, "<cs371date></html>");
}

#[tokio::test]
async fn test_serves_server_token() {
    let fx = Fixture::new("conn_server");
    fx.write("about.html", b"<cs371server>\n");
    let cfg = config_for(&fx);

    let raw = exchange(&cfg, b"GET /about.html HTTP/1.1\r\n\r\n").await;
    let (_, body) = split_response(&raw);

    assert_eq!(body, format!("{}<cs371server>", SERVER_SIGNATURE).into_bytes());
}

#[tokio::test]
async fn test_missing_image_is_404_with_image_type() {
    let fx = Fixture::new("conn_missing");
    let cfg = config_for(&fx);

    let raw = exchange(&cfg, b"GET /missing.png HTTP/1.1\r\n\r\n").await;
    let (head, body) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.1 404 Not Found\n"));
    assert!(head.ends_with("Content-Type: image/png"));
    assert_eq!(body, NOT_FOUND_BODY.as_bytes());
}

#[tokio::test]
async fn test_serves_image_bytes_verbatim() {
    let fx = Fixture::new("conn_image");
    let bytes: Vec<u8> = (0..=255u8).rev().cycle().take(3000).collect();
    fx.write("photo.jpg", &bytes);
    let cfg = config_for(&fx);

    let raw = exchange(&cfg, b"GET /photo.jpg HTTP/1.1\r\n\r\n").await;
    let (head, body) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.1 200 OK\n"));
    assert!(head.ends_with("Content-Type: image/jpg"));
    assert_eq!(body, bytes);
}

#[tokio::test]
async fn test_request_without_get_line_is_404() {
    let fx = Fixture::new("conn_no_get");
    fx.write("index.html", b"never served");
    let cfg = config_for(&fx);

    let raw = exchange(&cfg, b"POST /index.html HTTP/1.1\r\nHost: x\r\n\r\n").await;
    let (head, body) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.1 404 Not Found\n"));
    assert!(head.ends_with("Content-Type: text/html"));
    assert_eq!(body, NOT_FOUND_BODY.as_bytes());
}

#[tokio::test]
async fn test_header_fields_in_order() {
    let fx = Fixture::new("conn_order");
    let cfg = config_for(&fx);

    let raw = exchange(&cfg, b"GET /x.gif HTTP/1.1\r\n\r\n").await;
    let (head, _) = split_response(&raw);
    let names: Vec<&str> = head
        .lines()
        .skip(1)
        .map(|l| l.split(':').next().unwrap())
        .collect();

    assert_eq!(names, ["Date", "Server", "Connection", "Content-Type"]);
}

#[tokio::test]
async fn test_idle_client_gets_404_after_timeout() {
    let fx = Fixture::new("conn_idle");
    let cfg = config_for(&fx);

    let (mut client, server) = tokio::io::duplex(64 * 1024);
    client.write_all(b"Host: slow\r\n").await.unwrap();

    Connection::new(server, &cfg).run().await.unwrap();

    let mut out = Vec::new();
    client.read_to_end(&mut out).await.unwrap();
    let (head, body) = split_response(&out);

    assert!(head.starts_with("HTTP/1.1 404 Not Found\n"));
    assert_eq!(body, NOT_FOUND_BODY.as_bytes());
}

#[tokio::test]
async fn test_closed_client_fails_the_request() {
    let fx = Fixture::new("conn_closed");
    fx.write("index.html", b"hello");
    let cfg = config_for(&fx);

    let (mut client, server) = tokio::io::duplex(64 * 1024);
    client.write_all(b"GET /index.html HTTP/1.1\r\n\r\n").await.unwrap();
    drop(client);

    let result = Connection::new(server, &cfg).run().await;
    assert!(result.is_err());
}
