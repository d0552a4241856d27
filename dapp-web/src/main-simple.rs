//! Static file server for the dapp
//!
//! Serves the built Leptos WASM bundle from the dist/ directory. Unknown
//! paths fall back to index.html so client-side routing keeps working.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};

const ADDR: &str = "127.0.0.1:8080";
const DIST: &str = "dist";

fn main() {
    let listener = TcpListener::bind(ADDR).expect("failed to bind server address");

    println!("InkBoard dev server running at http://{ADDR}");
    println!("Serving from {DIST}/ (press Ctrl+C to stop)\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream),
            Err(e) => eprintln!("connection error: {e}"),
        }
    }
}

fn handle_client(mut stream: TcpStream) {
    let request_line = match BufReader::new(&mut stream).lines().next() {
        Some(Ok(line)) => line,
        _ => return,
    };

    let path = request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or("/")
        .split('?')
        .next()
        .unwrap_or("/");

    let (body, content_type, status) = load(path);
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\n\r\n",
        body.len()
    );

    if stream.write_all(response.as_bytes()).is_ok() {
        let _ = stream.write_all(&body);
    }
    let _ = stream.flush();
}

fn load(path: &str) -> (Vec<u8>, &'static str, &'static str) {
    let file_path = resolve(path);
    match fs::read(&file_path) {
        Ok(body) => (body, content_type(&file_path), "200 OK"),
        Err(_) => (
            b"<!DOCTYPE html><html><body><h1>dist/ not built yet</h1></body></html>".to_vec(),
            "text/html; charset=utf-8",
            "404 NOT FOUND",
        ),
    }
}

fn resolve(path: &str) -> PathBuf {
    if path == "/" || path.is_empty() {
        return Path::new(DIST).join("index.html");
    }

    let candidate = Path::new(DIST).join(path.trim_start_matches('/'));
    if candidate.is_file() {
        candidate
    } else {
        // Client-side route: hand out the app shell.
        Path::new(DIST).join("index.html")
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
