pub mod config;
pub mod dataset;
pub mod ids;
pub mod project;
pub mod reminder;
pub mod session;
pub mod tag;
pub mod task;
pub mod todo;

pub use config::*;
pub use dataset::*;
pub use ids::*;
pub use project::*;
pub use reminder::*;
pub use session::*;
pub use tag::*;
pub use task::*;
pub use todo::*;
