mod document;
mod export;

pub use document::{
    ExecutionSummary, KeyPoint, Metadata, PlanDimension, Planning, ResearchReport, Section,
    Source, SourceRef, VerificationItem,
};
pub use export::ReportFile;
