pub mod audit;
pub mod category;
pub mod report;

pub use audit::{AuditDefinition, AuditDetails, AuditResult, TableHeading};
pub use category::Category;
pub use report::Report;
