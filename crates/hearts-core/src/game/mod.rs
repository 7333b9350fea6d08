pub mod init;
pub mod serialization;
pub mod store;
