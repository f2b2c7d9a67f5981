pub mod access_map;
pub mod bulk;
pub mod context;
pub mod dispatch;
pub mod group;
pub mod replay;
pub mod resolve;
pub mod schema;
pub mod search;
pub mod user;
