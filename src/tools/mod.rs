//! Command handlers, one module per program object.
//!
//! Each handler module exposes its command name and description, a
//! `get_args` function producing default arguments, and an async `handler`
//! that builds, submits and reports a single transaction.

pub mod payment;
