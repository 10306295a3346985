pub(crate) mod background;
pub(crate) mod compositor;
pub(crate) mod frame;
pub(crate) mod icon;
pub(crate) mod layer;
pub(crate) mod scheduler;
pub(crate) mod surface;
pub(crate) mod text;
pub(crate) mod watermark;
