//! Shared test mocks and utilities for the supplier directory.

mod clock;
mod repository;

pub use clock::{FixedClock, SteppingClock};
pub use repository::FailingSupplierRepository;
