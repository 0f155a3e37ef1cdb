pub mod initdb;
pub mod migrate_and_serve;
pub mod seed;
pub mod serve;
pub mod stats;

pub use initdb::init_database;
pub use migrate_and_serve::migrate_and_serve;
pub use seed::seed;
pub use serve::serve;
pub use stats::print_stats;
