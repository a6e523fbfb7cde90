//! Headless motion integration
//!
//! Настоящий physics/collision stage живёт снаружи (игровой клиент).
//! Здесь только интеграция velocity → position для headless прогонов и тестов.

pub mod movement;

pub use movement::{integrate_motion, HeadlessMotionPlugin};
