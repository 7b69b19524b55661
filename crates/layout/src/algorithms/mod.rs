pub(crate) mod pagination;
