//! Pages of the application.

mod categories_page;

pub use categories_page::categories_page;
