mod stores;
mod use_cases;

pub use stores::Stores;
pub use use_cases::UseCases;
