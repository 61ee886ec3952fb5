// HTTP handlers grouped by resource

pub mod auth;
pub mod roster;
pub mod teams;
