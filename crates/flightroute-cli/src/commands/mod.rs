// Module exports for CLI subcommands
//
// Each module handles one subcommand; main.rs stays focused on argument
// parsing and dispatch.

pub mod airport;
pub mod list;
pub mod route;
