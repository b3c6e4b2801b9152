use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the different network environments the dashboard can point at.
#[derive(Clone, Default, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Local development environment (the indexer backend on localhost).
    Local,
    /// Polygon mainnet.
    #[default]
    Mainnet,
}

impl Environment {
    /// Returns the RPC endpoint associated with the environment.
    pub fn rpc_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:3000".to_string(),
            Environment::Mainnet => "https://polygon-rpc.com/".to_string(),
        }
    }

    /// Human-readable network name for the connection indicator.
    pub fn network_name(&self) -> &'static str {
        match self {
            Environment::Local => "Local",
            Environment::Mainnet => "Polygon",
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "mainnet" | "polygon" => Ok(Environment::Mainnet),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Mainnet => write!(f, "Mainnet"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.rpc_url())
    }
}
