pub mod request_origin;

pub use request_origin::{request_host, request_scheme};
