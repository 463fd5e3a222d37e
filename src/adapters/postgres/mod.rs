//! PostgreSQL adapters.

mod profile_reader;

pub use profile_reader::PostgresProfileReader;
