//! Individual integration test modules.

mod chains;
mod handle;
