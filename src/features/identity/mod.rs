pub mod identity_service;
pub mod interface_source;
