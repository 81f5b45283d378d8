pub(crate) mod model;
pub(crate) mod source;
pub(crate) mod synthetic;
