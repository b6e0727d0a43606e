use std::net::{SocketAddr, TcpListener, TcpStream};
use std::panic::Location;
use std::time::Duration;

use tokio::io::AsyncReadExt;
use tokio::net::TcpSocket;
use wiremock::MockServer;

#[must_use]
pub(crate) fn socket_tests_required() -> bool {
    std::env::var("FETCHER_REQUIRE_SOCKET_TESTS")
        .ok()
        .is_some_and(|value| matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
}

#[track_caller]
#[must_use]
pub(crate) fn should_skip_socket_bound_test() -> bool {
    if TcpListener::bind("127.0.0.1:0").is_ok() {
        return false;
    }

    let location = Location::caller();
    let message = format!(
        "[socket-bound-test] cannot bind localhost socket at {}:{}",
        location.file(),
        location.line()
    );
    if socket_tests_required() {
        panic!("{message}. Set FETCHER_REQUIRE_SOCKET_TESTS=0 to allow local skip behavior.");
    }

    eprintln!(
        "{message}. Skipping test. Set FETCHER_REQUIRE_SOCKET_TESTS=1 to fail-fast instead."
    );
    true
}

pub(crate) async fn start_mock_server_or_skip() -> Option<MockServer> {
    if should_skip_socket_bound_test() {
        None
    } else {
        Some(MockServer::start().await)
    }
}

/// Returns a URL on a localhost port that was just released, so connecting refuses.
#[track_caller]
pub(crate) fn refused_url_or_skip() -> Option<String> {
    if should_skip_socket_bound_test() {
        return None;
    }
    let listener = TcpListener::bind("127.0.0.1:0").ok()?;
    let addr = listener.local_addr().ok()?;
    drop(listener);
    Some(format!("http://{addr}/"))
}

/// Listener that never accepts, with its backlog full so new connects hang.
pub(crate) struct StalledBacklog {
    _listener: tokio::net::TcpListener,
    _held: Vec<TcpStream>,
}

/// Returns a URL whose connection attempts hang, and the guard keeping them hanging.
pub(crate) async fn stalled_connect_url_or_skip() -> Option<(String, StalledBacklog)> {
    if should_skip_socket_bound_test() {
        return None;
    }
    let socket = TcpSocket::new_v4().ok()?;
    socket.bind("127.0.0.1:0".parse::<SocketAddr>().ok()?).ok()?;
    let listener = socket.listen(1).ok()?;
    let addr = listener.local_addr().ok()?;

    let mut held = Vec::new();
    for _ in 0..64 {
        match TcpStream::connect_timeout(&addr, Duration::from_millis(200)) {
            Ok(stream) => held.push(stream),
            Err(_) => {
                let guard = StalledBacklog {
                    _listener: listener,
                    _held: held,
                };
                return Some((format!("http://{addr}/"), guard));
            }
        }
    }

    eprintln!("[socket-bound-test] listen backlog never filled. Skipping test.");
    None
}

/// Returns a URL whose server reads the request and closes without answering.
pub(crate) async fn closing_server_url_or_skip() -> Option<String> {
    if should_skip_socket_bound_test() {
        return None;
    }
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.ok()?;
    let addr = listener.local_addr().ok()?;
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf).await;
        }
    });
    Some(format!("http://{addr}/"))
}
