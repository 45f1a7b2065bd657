//! Command implementations

mod grade;
mod init;
mod platforms;
mod wizard;

pub use grade::{GradeFiles, grade};
pub use init::init;
pub use platforms::{open, platforms};
pub use wizard::wizard;
