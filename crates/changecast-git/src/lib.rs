//! Changecast Git - Git history queries for changelog generation
//!
//! This crate locates the hosted repository, resolves the release tag pair,
//! lists the commits between two tags and reads submodule pointers.

mod commits;
mod remote;
mod repository;
mod submodule;
mod tags;
pub mod types;
pub mod version;

#[cfg(test)]
pub(crate) mod fixture;

pub use remote::parse_repo_slug;
pub use repository::{GitRepo, Result};
pub use tags::select_release_pair;
pub use types::CommitInfo;
pub use version::version_cmp;
