mod commands;
mod handlers;

pub use commands::{Cli, Commands};
pub use handlers::{
    handle_categories, handle_check, handle_list, handle_resolve, handle_search, handle_show,
};
