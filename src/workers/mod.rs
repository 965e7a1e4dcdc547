pub mod command_runner;
pub mod request_lifecycle;
