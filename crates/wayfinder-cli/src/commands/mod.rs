// One module per subcommand; main.rs parses arguments and dispatches here.

pub mod connect;
pub mod pois;
pub mod route;
pub mod stitch;
pub mod validate;
