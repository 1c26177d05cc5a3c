//! Solow Growth Model
//!
//! Closed-form pieces of the Solow model used by the dashboard:
//!
//! - [`SolowParams`]: the five model parameters as an immutable record
//! - [`Solow`]: production, savings and depreciation evaluated for a parameter set
//!
//! The update rule the parameters come from is
//!
//! ```text
//! k_{t+1} = [(s z k_t^α) + (1 - δ) k_t] / (1 + n)
//! ```
//!
//! The dashboard only plots the instantaneous savings curve against the
//! depreciation reference line over a capital-stock axis.

mod params;
mod solow;

pub use params::SolowParams;
pub use solow::Solow;
