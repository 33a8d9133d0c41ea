use serde::{Deserialize, Serialize};

/// The result of one completed research run.
///
/// This is the value the backend returns from `/run`, held as an immutable
/// snapshot for the lifetime of one session and replaced wholesale when a
/// new query is submitted. Field names are the wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchReport {
    /// Original user query, echoed back by the backend
    pub query: String,
    /// High-level prose summary of the findings
    pub executive_summary: String,
    /// Query decomposition metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planning: Option<Planning>,
    /// Topical sections, in report order
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Every source consulted; index + 1 is the display rank
    #[serde(default)]
    pub all_sources: Vec<Source>,
    /// Aggregate source statistics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// How the run was executed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_summary: Option<ExecutionSummary>,
    /// Cross-validated claims
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification: Option<Vec<VerificationItem>>,
}

impl ResearchReport {
    /// Creates a minimal report with just a query and summary.
    pub fn new(query: impl Into<String>, executive_summary: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            executive_summary: executive_summary.into(),
            planning: None,
            sections: Vec::new(),
            all_sources: Vec::new(),
            metadata: None,
            execution_summary: None,
            verification: None,
        }
    }

    /// Iterates over the verified sources, preserving display order.
    ///
    /// Uses the same predicate as the Markdown export annotation.
    pub fn verified_sources(&self) -> impl Iterator<Item = &Source> {
        self.all_sources.iter().filter(|s| s.is_verified())
    }
}

/// How the backend decomposed the query before searching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planning {
    /// Name of the decomposition strategy applied
    pub decomposition_strategy: String,
    /// One entry per research dimension / agent
    #[serde(default)]
    pub dimensions: Vec<PlanDimension>,
    /// Total number of searches planned across all dimensions
    #[serde(default)]
    pub total_searches: u32,
}

/// A single dimension of the decomposed query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDimension {
    /// The aspect of the query this dimension covers
    pub aspect: String,
    /// Why this aspect was chosen
    pub rationale: String,
    /// Search queries issued for this dimension
    #[serde(default)]
    pub queries: Vec<String>,
}

/// One topical subdivision of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Section heading
    pub title: String,
    /// Section body, rendered verbatim
    pub content: String,
    /// Number of sources backing this section
    #[serde(default)]
    pub source_count: u32,
    /// Number of those sources that are high confidence
    #[serde(default)]
    pub high_confidence_count: u32,
    /// Supporting key findings; absent in sparse reports
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_points: Vec<KeyPoint>,
}

/// A single key finding inside a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyPoint {
    /// The finding itself
    pub text: String,
    /// Whether the finding was cross-validated
    pub is_high_confidence: bool,
    /// The source it was extracted from, when attributed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceRef>,
}

/// A lightweight citation attached to a key point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRef {
    pub title: String,
    pub url: String,
}

/// A citation with a confidence count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub url: String,
    /// Short excerpt from the source, when available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    /// How many independent agents confirmed this source
    #[serde(default)]
    pub confidence: u32,
}

/// Confidence threshold above which a source counts as verified.
const VERIFIED_CONFIDENCE: u32 = 2;

impl Source {
    /// A source is verified once at least two agents confirmed it.
    ///
    /// This predicate drives both the verified-only source filter and the
    /// verification badge in exported Markdown.
    pub fn is_verified(&self) -> bool {
        self.confidence >= VERIFIED_CONFIDENCE
    }
}

/// Aggregate statistics over the sources of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub total_sources: u32,
    pub high_confidence_sources: u32,
    /// Names of the research techniques the backend applied
    #[serde(default)]
    pub techniques_used: Vec<String>,
}

/// How the backend executed the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionSummary {
    pub agents_deployed: u32,
    /// Wall-clock processing time in seconds
    pub processing_time: f64,
}

/// A claim that was cross-validated against multiple sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationItem {
    pub claim: String,
    /// Labels of the evidence supporting the claim
    #[serde(default)]
    pub supported_by: Vec<String>,
}
