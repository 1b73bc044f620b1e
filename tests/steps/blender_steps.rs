//! Steps for the blender feature.
//!
//! Blue frogs never turn into mush, so that scenario fails on purpose.

use cucumber::{given, then, when};
use scenario_pacing::{
    StepResult,
    step::{ensure, fail},
};

use crate::world::PacingWorld;

#[given("I put Red Tree Frog in a blender,")]
fn red_frog(world: &mut PacingWorld) -> StepResult {
    world.step(|pacer, _| {
        pacer.sleep(0.3)?;
        Ok(())
    })
}

#[given("I put Blue Tree Frog in a blender,")]
fn blue_frog(world: &mut PacingWorld) -> StepResult {
    world.step(|pacer, _| {
        pacer.sleep(0.3)?;
        Ok(())
    })
}

#[when("I switch the blender on")]
fn switch_on(world: &mut PacingWorld) -> StepResult {
    world.step(|pacer, _| {
        pacer.sleep(0.5)?;
        ensure(true != false, "true is false")
    })
}

#[then("it should transform into red mush")]
fn red_mush(world: &mut PacingWorld) -> StepResult {
    world.step(|_, _| ensure(true, "unreachable"))
}

#[then("it should transform into blue mush")]
fn blue_mush(world: &mut PacingWorld) -> StepResult { world.step(|_, _| fail("blue frogs do not blend")) }
