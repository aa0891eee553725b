//! Application pages that do not belong to an entity

mod not_found;

pub use not_found::NotFoundPage;
