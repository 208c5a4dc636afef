//! In-memory library lending.
//!
//! This crate keeps a catalog of books and a registry of patrons, lends
//! books through a [`LendingService`] that refuses unknown books, unknown
//! patrons, patrons owing fees and double checkouts, and records every
//! outcome in an append-only transaction log or error log.

pub mod book;
pub mod catalog;
pub mod command;
pub mod config;
pub mod error;
pub mod error_log;
pub mod events;
pub mod observers;
pub mod patron;
pub mod registry;
pub mod report;
pub mod service;
pub mod transaction;

pub use book::{Book, Genre};
pub use catalog::Catalog;
pub use command::{Command, Outcome};
pub use config::{BookSeed, CheckoutRequest, LibraryConfig};
pub use error::{ConfigError, InputError, LendingError};
pub use error_log::{ErrorEntry, ErrorLog};
pub use events::LendingEvent;
pub use observers::{LendingObserver, TracingObserver};
pub use patron::Patron;
pub use registry::PatronRegistry;
pub use report::Report;
pub use service::LendingService;
pub use transaction::{Activity, Transaction, TransactionLog};
