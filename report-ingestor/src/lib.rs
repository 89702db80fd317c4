pub mod envelope;
pub mod processor;
pub mod response;
