//! Community forum module.
//!
//! An anonymous, locally stored feed of posts with replies and likes.

mod errors;
#[allow(clippy::module_inception)]
mod forum;
mod post;

pub use errors::ForumError;
pub use forum::Forum;
pub use post::{Post, Reply, ANONYMOUS_USERNAME};
