pub(crate) mod assemble;
pub(crate) mod config;
pub(crate) mod palette;
pub(crate) mod svg;
