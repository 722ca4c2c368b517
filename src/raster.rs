pub(crate) mod blend;
pub(crate) mod circle;
pub(crate) mod clip;
pub(crate) mod line;
pub(crate) mod rect;
pub(crate) mod triangle;
