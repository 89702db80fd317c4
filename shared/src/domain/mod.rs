pub mod error;
pub mod report;

pub use error::{IngestError, IngestResult};
pub use report::Report;
