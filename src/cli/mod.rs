//! Terminal front end for the calculation engine.

pub mod alloc;
pub mod budget;
pub mod debts;
pub mod interest;
pub mod payment;
pub mod refinance;
pub mod setup;
pub mod ui;
