use std::collections::BTreeMap;
use std::net::IpAddr;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::config::ConfigError;

/// An address the OS reports as bound to an interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddress {
    pub name: String,
    pub ip: IpAddr,
    pub is_loopback: bool,
}

/// An OS interface and its hardware address. `mac` is empty when the link has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInterface {
    pub name: String,
    pub mac: String,
}

/// How MAC addresses are selected, and therefore which response shape is served.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MacMode {
    /// First `en*`/`eth*` interface with a hardware address.
    #[default]
    SingleBest,
    /// Every non-empty hardware address, in enumeration order.
    ListAll,
    /// Interface name to hardware address.
    ByNameMap,
}

impl FromStr for MacMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "single" | "single-best" => Ok(Self::SingleBest),
            "list" | "list-all" => Ok(Self::ListAll),
            "map" | "by-name-map" => Ok(Self::ByNameMap),
            _ => Err(ConfigError::InvalidMacMode(s.to_string())),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum MacResult {
    Single(String),
    List(Vec<String>),
    Map(BTreeMap<String, String>),
}

impl MacResult {
    pub fn empty(mode: MacMode) -> Self {
        match mode {
            MacMode::SingleBest => Self::Single(String::new()),
            MacMode::ListAll => Self::List(Vec::new()),
            MacMode::ByNameMap => Self::Map(BTreeMap::new()),
        }
    }
}
