pub(crate) mod fs;
pub mod tracing;
