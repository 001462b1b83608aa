use std::net::{AddrParseError, IpAddr, SocketAddr};
use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ServerConfig {
    /// An IP literal, v4 or v6.
    #[serde(default = "ConfigHelper::default_host")]
    pub host: String,

    #[serde(default = "ConfigHelper::default_port")]
    pub port: u16,

    /// Route segment under `/api`, e.g. `generate` serves `POST /api/generate`.
    #[serde(default = "ConfigHelper::default_route")]
    pub route: String,

    /// Browser origins allowed to POST. Empty allows any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.host.trim().parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: ConfigHelper::default_host(),
            port: ConfigHelper::default_port(),
            route: ConfigHelper::default_route(),
            allowed_origins: Vec::new(),
        }
    }
}
