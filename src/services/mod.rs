//! Game services
//!
//! Free functions operating on the shared [`Galaxy`](crate::models::galaxy::Galaxy)
//! state. Each service validates its preconditions, mutates state, and
//! appends narration to the mission log.

pub mod combat;
pub mod computer;
pub mod damage;
pub mod navigation;
pub mod scan;
pub mod scoring;
