//! Command execution for the packager and the interest calculator.

mod interest;
mod package;

pub use interest::execute_interest;
pub use package::{execute_package, format_size};
