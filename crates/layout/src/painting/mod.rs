pub(crate) mod box_painter;
