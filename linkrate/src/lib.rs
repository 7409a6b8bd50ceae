//! # Radio Link Capacity
//!
//! `linkrate` estimates the Shannon-limit bitrate of a point-to-point
//! radio link from its free-space link budget.

mod budget;
mod capacity;
mod error;
pub mod units;

pub use crate::{
    budget::{LinkBudget, LinkBudgetBuilder},
    error::LinkRateError,
};
