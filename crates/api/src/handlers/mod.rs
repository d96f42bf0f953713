pub mod feedback;
pub mod probe;

pub use feedback::get_feedback;
pub use probe::register_probe;
