pub mod interface_address;

pub use interface_address::{detect_answer_address, first_usable_ipv4};
