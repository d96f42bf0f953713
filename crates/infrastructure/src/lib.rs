pub mod dns;
pub mod labels;
pub mod store;
pub mod system;
