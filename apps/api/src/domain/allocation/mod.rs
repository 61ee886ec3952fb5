// Team allocation
//
// Splits the active roster into fixed-composition teams and persists them.
// Planning is pure and takes an injected RNG; persistence goes through the
// team repository one team at a time.

pub mod allocator;
pub mod errors;
pub mod executor;
pub mod plan;

#[cfg(test)]
mod testing;

pub use allocator::TeamAllocator;
pub use errors::{AllocationError, AllocationResult};
pub use executor::{apply_plans, AllocatedTeam};
pub use plan::{max_teams, plan_teams, TeamPlan};

/// Team leaders per team
pub const LEADERS_PER_TEAM: usize = 1;
/// Drivers per team
pub const DRIVERS_PER_TEAM: usize = 2;
/// Police officers per team
pub const POLICE_PER_TEAM: usize = 2;
/// Vehicles per team
pub const VEHICLES_PER_TEAM: usize = 2;
