//! wf-ipr: inflow performance relationship (IPR) curve generation.
//!
//! Sweeps the surface rate of a well from near-zero to a requested maximum,
//! solving the radial inflow equation at every step, and collects the
//! resulting (rate, flowing wellbore pressure) pairs into an [`IprCurve`].
//! Points are evaluated in parallel; the curve is truncated at the first
//! operating point the reservoir cannot physically sustain.

pub mod error;
pub mod generate;
pub mod sweep;

pub use error::IprError;
pub use generate::generate_ipr;
pub use sweep::{IprCurve, IprPoint, IprSweep};
