// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod postgres_operator_repository;
pub mod postgres_staff_repository;
pub mod postgres_team_repository;
pub mod postgres_vehicle_repository;

pub use postgres_operator_repository::PostgresOperatorRepository;
pub use postgres_staff_repository::PostgresStaffRepository;
pub use postgres_team_repository::PostgresTeamRepository;
pub use postgres_vehicle_repository::PostgresVehicleRepository;
