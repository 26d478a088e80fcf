pub mod dto;
pub mod services;

pub use dto::{AuthHeader, Credentials};
pub use services::{build_auth_header, header_for};
