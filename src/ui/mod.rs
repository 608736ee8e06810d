pub mod common_nav;
pub mod components;
pub mod form;
pub mod help;
pub mod layout;
pub mod style;
