pub(crate) mod fit;
pub(crate) mod hit;
pub(crate) mod mapper;
