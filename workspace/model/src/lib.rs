//! Database entities of the match log.

pub mod entities;
