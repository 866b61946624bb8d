pub mod console;
pub mod service;
