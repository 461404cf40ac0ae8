//! Dash for Life: a 2D platformer character controller for Bevy and avian2d.
//!
//! The [`motion`] domain holds the controller itself: sensor probes, the
//! per-frame state machine, and the systems that bind it to the physics
//! world. The [`sandbox`] domain builds a small test room around it.

pub mod motion;
pub mod sandbox;
