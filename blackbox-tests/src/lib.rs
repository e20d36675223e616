//! Black-box tests for civicforms live under `tests/`; this crate has no code.
