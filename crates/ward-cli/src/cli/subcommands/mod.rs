mod bulk;
mod group;
mod user;

pub use bulk::BulkCommands;
pub use group::GroupCommands;
pub use user::{UserCommands, UserListArgs};
