pub use send_email::error_chain_fmt;

pub mod health_check;
pub mod send_email;
