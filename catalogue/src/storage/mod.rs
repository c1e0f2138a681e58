//! This module defines building blocks for the collection storage.
mod append_log;

pub(crate) use append_log::{AppendLog, LogRef};
