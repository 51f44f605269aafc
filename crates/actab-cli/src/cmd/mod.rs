pub mod expand;
pub mod import;
pub mod template;
