pub mod backup;
pub mod codec;
pub mod report;
