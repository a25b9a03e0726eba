#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use bijux_rewind_core::FixedClock;
use bijux_rewind_server::{build_router, ApiConfig, AppState};
use serde_json::Value;
use time::macros::datetime;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

pub async fn spawn_app(api: ApiConfig) -> SocketAddr {
    let clock = Arc::new(FixedClock(datetime!(2024-05-01 09:00 UTC)));
    let app = build_router(AppState::with_clock(api, clock));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

pub async fn send_raw_with_method(
    addr: SocketAddr,
    method: &str,
    path: &str,
    headers: &[(&str, &str)],
    body: Option<&str>,
) -> (u16, String, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let mut req = format!("{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n");
    for (k, v) in headers {
        req.push_str(&format!("{k}: {v}\r\n"));
    }
    match body {
        Some(body) => {
            req.push_str("Content-Type: application/json\r\n");
            req.push_str(&format!("Content-Length: {}\r\n\r\n{body}", body.len()));
        }
        None => req.push_str("Content-Length: 0\r\n\r\n"),
    }
    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response must have separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("http status");
    (status, head.to_string(), body.to_string())
}

pub async fn get_json(addr: SocketAddr, path: &str, session: &str) -> (u16, Value) {
    let (status, _, body) =
        send_raw_with_method(addr, "GET", path, &[("x-session-id", session)], None).await;
    (status, serde_json::from_str(&body).expect("json body"))
}

pub async fn post_json(addr: SocketAddr, path: &str, session: &str, body: Value) -> (u16, Value) {
    send_json(addr, "POST", path, session, Some(body)).await
}

pub async fn send_json(
    addr: SocketAddr,
    method: &str,
    path: &str,
    session: &str,
    body: Option<Value>,
) -> (u16, Value) {
    let text = body.map(|b| b.to_string());
    let (status, _, body) = send_raw_with_method(
        addr,
        method,
        path,
        &[("x-session-id", session)],
        text.as_deref(),
    )
    .await;
    (status, serde_json::from_str(&body).expect("json body"))
}

pub fn header_value<'a>(head: &'a str, name: &str) -> Option<&'a str> {
    head.lines().skip(1).find_map(|line| {
        let (k, v) = line.split_once(':')?;
        k.trim().eq_ignore_ascii_case(name).then(|| v.trim())
    })
}
