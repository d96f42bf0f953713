pub mod answer;
pub mod client_subnet;
pub mod server;

pub use answer::synthesize_answer;
pub use client_subnet::client_subnet;
pub use server::CorrelationDnsHandler;
