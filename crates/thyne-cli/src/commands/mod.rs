pub mod seed;
pub mod status;

pub use seed::SeedCommand;
pub use status::StatusCommand;
