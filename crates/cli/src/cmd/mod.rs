mod build;
mod plan;
mod var;
mod version;

pub use build::cmd_build;
pub use plan::cmd_plan;
pub use var::cmd_var;
pub use version::cmd_version;
