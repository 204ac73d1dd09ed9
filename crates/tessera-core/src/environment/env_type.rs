use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Runtime side a compiled unit is admitted into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvType {
    Client,
    Server,
}

/// Accepts the same spellings as [`FromStr`], in any case
impl<'de> Deserialize<'de> for EnvType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl EnvType {
    /// Token as written in annotation values
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvType::Client => "CLIENT",
            EnvType::Server => "SERVER",
        }
    }
}

impl fmt::Display for EnvType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EnvType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "client" => Ok(EnvType::Client),
            "server" => Ok(EnvType::Server),
            _ => Err(format!("Unknown environment '{}', expected 'client' or 'server'", s)),
        }
    }
}

/// Environment a whole plugin declares in its metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModEnvironment {
    #[serde(rename = "client")]
    Client,
    #[serde(rename = "server")]
    Server,
    #[default]
    #[serde(rename = "*")]
    Universal,
}

impl ModEnvironment {
    /// Whether a plugin with this declaration may load on `env`
    pub fn matches(&self, env: EnvType) -> bool {
        match self {
            ModEnvironment::Client => env == EnvType::Client,
            ModEnvironment::Server => env == EnvType::Server,
            ModEnvironment::Universal => true,
        }
    }
}
