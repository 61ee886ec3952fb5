// Infrastructure layer module
// PostgreSQL adapters behind the domain repository traits

pub mod repositories;
