pub mod call;
pub mod init;
pub mod plants;
pub mod serve;
pub mod tools;
