mod fixtures;
pub mod tracing;

pub use fixtures::{RenderRun, ValuesDir, fixture, render_with, yaml};
pub use self::tracing::{CapturedEvent, init_test_tracing};
