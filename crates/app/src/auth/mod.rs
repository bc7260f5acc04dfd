//! Authentication

mod errors;
mod models;
mod otp;
mod password;
mod repository;
mod service;
mod token;

pub use errors::*;
pub use models::*;
pub use otp::*;
pub use password::*;
pub use service::*;
pub use token::*;
