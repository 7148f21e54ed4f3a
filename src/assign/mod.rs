pub mod engine;
pub mod types;

pub use engine::{assign_groups, EXTRA_CATEGORY};
pub use types::{Assignment, TableRow};
