pub(crate) mod aspect;
pub(crate) mod model;
pub(crate) mod update;
