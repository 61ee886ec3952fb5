// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod allocation;
pub mod calendar;
pub mod operator;
pub mod repositories;
pub mod staff;
pub mod status;
pub mod team;
pub mod vehicle;
