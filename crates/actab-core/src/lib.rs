pub mod error;
pub mod expand;
pub mod export;
pub mod import;
pub mod io;
pub mod record;
pub mod schema;
pub mod template;

pub use error::{ActabError, Result};
