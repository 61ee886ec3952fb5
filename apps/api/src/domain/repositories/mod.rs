// Repository traits (ports)
// Implemented by infrastructure adapters and by in-memory fakes in tests

pub mod operator_repository;
pub mod staff_repository;
pub mod team_repository;
pub mod vehicle_repository;

pub use operator_repository::OperatorRepository;
pub use staff_repository::StaffRepository;
pub use team_repository::TeamRepository;
pub use vehicle_repository::VehicleRepository;
