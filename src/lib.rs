//! qdesk - outpatient front desk
//!
//! TUI for the check-in desk of a hospital outpatient clinic. Shows one
//! day's appointment queue, moves patients through the visit workflow,
//! narrows the list by patient or doctor and summarizes the day.
//!
//! Follows a Pure Core / Impure Shell split: [`model`] and [`state`] are
//! pure, [`source`] and [`view`] talk to the outside world.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
