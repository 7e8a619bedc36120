//! # CORDIC Unit Tests
//!
//! Tests for the pieces of the CORDIC engine below the clocked interface.
