//! # Constants and type definitions
//!
//! Centralizes the few numeric constants and type aliases shared by the
//! solver and the batch driver.

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Angle in radians
pub type Radian = f64;
