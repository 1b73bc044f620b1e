//! Steps for the ninja fight feature.
//!
//! The final step fails on purpose so the runner can check that failures
//! are reported.

use cucumber::{given, then, when};
use scenario_pacing::{
    StepResult,
    step::{ensure, fail},
};

use crate::world::PacingWorld;

#[given("the ninja has a third level black-belt")]
fn black_belt(world: &mut PacingWorld) -> StepResult { world.step(|_, _| Ok(())) }

#[when("attacked by Chuck Norris")]
fn attacked(world: &mut PacingWorld) -> StepResult {
    world.step(|pacer, _| {
        pacer.sleep(0.3)?;
        ensure(true != false, "true is false")
    })
}

#[then("the ninja should run for his life")]
fn run_for_life(world: &mut PacingWorld) -> StepResult {
    world.step(|pacer, context| {
        pacer.sleep(0.4)?;
        ensure(!context.failed(), "an earlier step failed")
    })
}

#[then("fall off a cliff")]
fn fall_off_cliff(world: &mut PacingWorld) -> StepResult {
    world.step(|pacer, _| {
        pacer.sleep(0.2)?;
        fail("The ninja has die :(")
    })
}
