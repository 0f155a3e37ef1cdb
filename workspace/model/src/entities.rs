//! This file serves as the root for all SeaORM entity modules.
//! The match log only knows three tables: the accounts that log games,
//! the hero reference data, and the match records themselves.

pub mod account;
pub mod hero;
pub mod match_record;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::account::Entity as Account;
    pub use super::hero::Entity as Hero;
    pub use super::match_record::Entity as MatchRecord;
    pub use super::match_record::Side;
}
