//! Rack Planner Library
//!
//! Spatial layout and collision engine for datacenter equipment:
//! 1U-granular rack placement, layered floor-plan grid placement, the
//! coordinate bridge between the 2D floor plan and the 3D scene view,
//! and the drag/placement state machine that turns pointer input into
//! validated placements.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod services;
