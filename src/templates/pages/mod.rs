pub mod home;
pub mod prediction;

pub use home::home_page;
pub use prediction::results_partial;
