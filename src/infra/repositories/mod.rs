pub mod postgres_block_repo;
pub mod postgres_booking_repo;
pub mod postgres_service_repo;
pub mod postgres_team_repo;
pub mod sqlite_block_repo;
pub mod sqlite_booking_repo;
pub mod sqlite_service_repo;
pub mod sqlite_team_repo;
