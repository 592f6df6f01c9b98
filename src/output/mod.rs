mod report;

pub use report::{render, write_report, OutputFormat};
