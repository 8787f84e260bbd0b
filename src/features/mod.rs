pub mod identity;
pub mod release;
