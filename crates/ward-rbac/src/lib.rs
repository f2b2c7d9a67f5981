//! # ward-rbac
//!
//! Role catalog, role groups, identity directory and effective permission
//! resolution for Warden.
//!
//! All state is in memory and owned by [`WardService`]. The catalog is fixed
//! once seeded; the registry and the directory change only through the
//! service's mutation methods. Capability views are computed on every read
//! by [`resolver::resolve`] and never cached.

pub mod bulk;
pub mod catalog;
pub mod directory;
pub mod error;
pub mod filter;
pub mod groups;
pub mod replay;
pub mod resolver;
pub mod results;
pub mod seed;
pub mod service;
pub mod tenancy;

pub use error::RbacError;
pub use replay::ActionReplayer;
pub use service::WardService;
pub use tenancy::AdminContext;
