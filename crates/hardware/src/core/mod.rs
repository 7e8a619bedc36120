//! Hardware units and their clocked models.

pub mod units;
