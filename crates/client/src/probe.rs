// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Connectivity probe run before a registration is assembled.

use std::io;
use std::net::SocketAddr;

use crate::config::ClientConfig;
use afterclass_domain::NetworkStatus;
use tokio::net::TcpStream;
use tracing::{debug, warn};
use url::{Host, Url};

/// Opens a TCP connection to `host`. IP literals are dialed directly so
/// bracketed IPv6 hosts never go through name resolution.
async fn connect(host: Host<&str>, port: u16) -> io::Result<TcpStream> {
    match host {
        Host::Domain(domain) => TcpStream::connect((domain, port)).await,
        Host::Ipv4(ip) => TcpStream::connect(SocketAddr::from((ip, port))).await,
        Host::Ipv6(ip) => TcpStream::connect(SocketAddr::from((ip, port))).await,
    }
}

/// Checks whether the backend host accepts TCP connections.
///
/// An unparseable base URL counts as offline.
pub async fn detect_network(config: &ClientConfig) -> NetworkStatus {
    let Ok(url) = Url::parse(&config.base_url) else {
        warn!(base_url = %config.base_url, "Base URL does not parse, treating as offline");
        return NetworkStatus::Offline;
    };
    let (Some(host), Some(port)) = (url.host(), url.port_or_known_default()) else {
        return NetworkStatus::Offline;
    };
    let target: String = host.to_string();

    match tokio::time::timeout(config.probe_timeout, connect(host, port)).await {
        Ok(Ok(_)) => NetworkStatus::Online,
        Ok(Err(e)) => {
            debug!(host = %target, port, error = %e, "Connectivity probe failed");
            NetworkStatus::Offline
        }
        Err(_) => {
            debug!(host = %target, port, "Connectivity probe timed out");
            NetworkStatus::Offline
        }
    }
}
