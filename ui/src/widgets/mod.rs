mod cell_view;
mod data_table;
mod language_switcher;
mod loader;
mod page_header;
mod snackbar;

pub use cell_view::{cell_view, chip};
pub use data_table::listing_table;
pub use language_switcher::language_switcher;
pub use loader::loader;
pub use page_header::page_header;
pub use snackbar::snackbar;
