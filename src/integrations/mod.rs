// src/integrations/mod.rs
//
// External Integrations Module

pub mod random_org;

pub use random_org::{RandomError, RandomOrgClient, RandomSource};
