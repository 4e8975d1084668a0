#![allow(dead_code)]

use hookline::{BoxError, Context, HookResult, Listener, Registry};

// ============================================================================
// Test Listeners
// ============================================================================

/// Reads `num`, increments it, writes it back and sets it as the result.
pub struct Increment;

impl Listener for Increment {
    fn handle(&self, result: &mut HookResult, _context: Option<&Context>) -> Result<(), BoxError> {
        let num = result.param_as::<i64>("num")? + 1;
        result.set_param("num", num).set(num);
        Ok(())
    }
}

/// Overwrites the `sentinel` parameter, so tests can tell whether it ran.
pub struct Tamper;

impl Listener for Tamper {
    fn handle(&self, result: &mut HookResult, _context: Option<&Context>) -> Result<(), BoxError> {
        result.set_param("sentinel", "tampered");
        Ok(())
    }
}

/// The host object plugins see through the bound context.
#[derive(Debug)]
pub struct Blog {
    pub name: String,
}

/// Registers one event per priority, each recording its priority.
pub fn register_priorities(
    registry: &Registry,
    key: &str,
    priorities: &[i32],
    recorder: &hookline::testing::Recorder,
) {
    for priority in priorities {
        registry
            .event(key)
            .set_priority(*priority)
            .attach(recorder.listener(priority.to_string()));
    }
}
