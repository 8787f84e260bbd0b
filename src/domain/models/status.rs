use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::models::{MacResult, ReleaseStatus};

/// Single-best shape, reported together with the startup release check.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CallHomeStatus {
    pub call_home_response: u16,
    pub hostname: String,
    pub ip: String,
    pub latest_version: String,
    #[serde(rename = "MAC")]
    pub mac: String,
    pub version: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MacListStatus {
    pub hostname: String,
    pub ip_address: String,
    pub mac_addresses: Vec<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MacMapStatus {
    pub version: String,
    pub hostname: String,
    pub ip_address: String,
    pub mac_addresses: BTreeMap<String, String>,
}

/// Body served by the status endpoint. Every field is best-effort: missing data is empty, never an error.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum StatusResponse {
    CallHome(CallHomeStatus),
    MacList(MacListStatus),
    MacMap(MacMapStatus),
}

impl StatusResponse {
    pub fn assemble(
        hostname: String,
        ip: String,
        mac: MacResult,
        version: &str,
        release: &ReleaseStatus,
    ) -> Self {
        match mac {
            MacResult::Single(mac) => Self::CallHome(CallHomeStatus {
                call_home_response: release.call_home_response,
                hostname,
                ip,
                latest_version: release.latest_version.clone(),
                mac,
                version: version.to_string(),
            }),
            MacResult::List(mac_addresses) => Self::MacList(MacListStatus {
                hostname,
                ip_address: ip,
                mac_addresses,
            }),
            MacResult::Map(mac_addresses) => Self::MacMap(MacMapStatus {
                version: version.to_string(),
                hostname,
                ip_address: ip,
                mac_addresses,
            }),
        }
    }

    /// Only the call-home shape is indented.
    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::CallHome(_))
    }
}
