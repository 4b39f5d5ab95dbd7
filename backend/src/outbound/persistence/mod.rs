//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Implements the domain's [`crate::domain::ports::UserStore`] port via
//! `diesel-async` with `bb8` connection pooling.
//!
//! Principles:
//!
//! - **Thin adapter**: the store implementation only translates between
//!   Diesel rows and the domain entity; no business logic lives here.
//! - **Internal models**: row structs (`models`) and the table definition
//!   (`schema`) never leave this module.
//! - **Parameterised SQL only**: every caller-supplied value goes through
//!   Diesel's query builder, never into query text.
//! - **Typed errors**: pool and Diesel failures are mapped to the port's
//!   error with the operation name attached.

mod diesel_user_store;
mod models;
mod pool;
mod schema;

pub use diesel_user_store::DieselUserStore;
pub use pool::{DbPool, PoolConfig, PoolError};
