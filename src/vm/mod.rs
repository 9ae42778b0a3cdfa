pub mod mappers;
pub mod progress;

pub use mappers::*;
pub use progress::*;
