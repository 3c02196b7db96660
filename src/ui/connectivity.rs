use std::time::Duration;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use reqwest::Url;
use tokio::net::TcpStream;

/// Decides whether a search should be attempted at all.
#[async_trait]
pub trait Connectivity: Send + Sync {
    async fn is_online(&self) -> bool;
}

/// Treats the network as available when a TCP connection to the API
/// host can be opened within `timeout`.
pub struct TcpProbe {
    host: String,
    port: u16,
    timeout: Duration,
}

impl TcpProbe {
    pub fn for_url(url: &str, timeout: Duration) -> Result<Self> {
        let parsed = Url::parse(url)?;
        let host = parsed
            .host_str()
            .ok_or_else(|| anyhow!("No host in {}", url))?
            .to_string();
        let port = parsed
            .port_or_known_default()
            .ok_or_else(|| anyhow!("No port for {}", url))?;
        Ok(Self {
            host,
            port,
            timeout,
        })
    }
}

#[async_trait]
impl Connectivity for TcpProbe {
    async fn is_online(&self) -> bool {
        let connect = TcpStream::connect((self.host.as_str(), self.port));
        match tokio::time::timeout(self.timeout, connect).await {
            Ok(Ok(_)) => true,
            Ok(Err(e)) => {
                tracing::warn!(host = %self.host, port = self.port, "Network unavailable: {}", e);
                false
            }
            Err(_) => {
                tracing::warn!(host = %self.host, port = self.port, "Network check timed out");
                false
            }
        }
    }
}

/// Skips the check entirely.
pub struct AssumeOnline;

#[async_trait]
impl Connectivity for AssumeOnline {
    async fn is_online(&self) -> bool {
        true
    }
}
