// Shared test helpers
#![allow(dead_code)]

use axum::Router;
use std::net::SocketAddr;
use waveshape::models::Snapshot;

pub const TEST_CONFIG: &str = r#"
[server]
port = 8081
host = "0.0.0.0"

[feed]
url = "http://127.0.0.1:9/status.json"
timeout_ms = 2000

[publishing]
broadcast_capacity = 10

[monitoring]
poll_interval_ms = 1800
stats_log_interval_secs = 60

[theme]
path = "data/theme.json"
"#;

pub fn snapshot(timestamp: u64) -> Snapshot {
    Snapshot {
        timestamp,
        cpu: 42.0,
        ram: 24.0,
        disk: 40.0,
        users: 0,
        guilds: 0,
        uptime: 0,
        commands_total: 0,
        commands_ok: 0,
        commands_error: 0,
    }
}

/// Serves `router` on an ephemeral localhost port and returns its address.
pub async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    addr
}
