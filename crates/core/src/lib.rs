pub mod config;
pub mod error;
pub mod labels;
pub mod report;

pub use config::Config;
pub use error::*;
pub use labels::LabelSet;
pub use report::*;
