mod index;
mod links;

pub use index::index_handler;
pub use links::{create_link_form_handler, delete_link_form_handler};
