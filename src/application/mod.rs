pub mod commands;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod queries;
pub mod services;

pub use error::ApplicationResult;
pub use pipeline::Handler;
