mod domain;
pub use domain::*;

mod cutoff;
pub use cutoff::{Cutoff, TIMESTAMP_FORMAT, format_timestamp};

mod error;
pub use error::ModelError;
