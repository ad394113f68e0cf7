pub mod board;
pub mod brands;
pub mod init;
pub mod team;
pub mod tickets;
