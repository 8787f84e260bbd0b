pub mod release_service;
