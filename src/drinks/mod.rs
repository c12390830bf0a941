pub mod advice;
pub mod amount;
pub mod catalog;
pub mod repo;
pub mod repo_types;
