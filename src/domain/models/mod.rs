pub mod identity;
pub mod release;
pub mod status;

pub use identity::{InterfaceAddress, MacMode, MacResult, NetworkInterface};
pub use release::{GithubRelease, ReleaseStatus};
pub use status::StatusResponse;
