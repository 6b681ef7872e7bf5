pub mod album;
pub mod form;
pub mod selection;
