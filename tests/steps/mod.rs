//! Step definitions for pacing behavioural tests.

mod blender_steps;
mod ninja_steps;
mod tutorial_steps;
