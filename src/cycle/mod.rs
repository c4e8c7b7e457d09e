mod clean;
mod driver;
mod report;
mod steps;

pub use clean::clean;
pub use driver::run;
pub use steps::{build_args, configure_args, test_args};
