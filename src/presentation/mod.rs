// Presentation layer - Operator-facing output
pub mod report;
