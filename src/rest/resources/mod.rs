//! Concrete resource types.
//!
//! Each type here is field mapping over the generic core in [`crate::rest`]:
//! [`Milestone`] carries the full operation set (fetch, refresh, update,
//! delete, label listing); [`User`] and [`Label`] are the nested and listed
//! shapes it references.

mod label;
mod milestone;
mod user;

pub use label::Label;
pub use milestone::{Milestone, MilestoneState, MilestoneUpdate};
pub use user::User;
