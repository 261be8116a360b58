#![allow(dead_code)]

pub mod failing_mirror;
pub mod test_env;

pub use failing_mirror::FailingMirror;
pub use test_env::*;
