//! Test-only crate. See `tests/` for end-to-end runs against real files.
