use chrono::{DateTime, Utc};

use crate::config::{JSON_MIME, MARKDOWN_MIME, REPORT_FILE_STEM};

use super::ResearchReport;

impl ResearchReport {
    /// Renders the report as Markdown, stamped with the current time.
    pub fn to_markdown(&self) -> String {
        self.to_markdown_at(Utc::now())
    }

    /// Renders the report as Markdown with an explicit generation timestamp.
    ///
    /// Section and source order follows the report exactly. Absent optional
    /// fields render as empty strings; this never fails on a sparse report.
    pub fn to_markdown_at(&self, generated: DateTime<Utc>) -> String {
        let mut md = String::new();

        md.push_str(&format!("# {}\n\n", self.query));

        md.push_str(&format!(
            "**Generated:** {}\n",
            generated.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        let processing_time = self
            .execution_summary
            .as_ref()
            .map(|e| e.processing_time.to_string())
            .unwrap_or_default();
        md.push_str(&format!("**Processing Time:** {}s\n\n", processing_time));
        md.push_str("---\n\n");

        md.push_str(&format!(
            "## Executive Summary\n\n{}\n\n---\n\n",
            self.executive_summary
        ));

        for (idx, section) in self.sections.iter().enumerate() {
            md.push_str(&format!(
                "## {}. {}\n\n{}\n\n",
                idx + 1,
                section.title,
                section.content
            ));

            if !section.key_points.is_empty() {
                md.push_str("### Key Findings\n\n");
                for point in &section.key_points {
                    let stars = if point.is_high_confidence { "⭐⭐" } else { "⭐" };
                    md.push_str(&format!("{} {}\n", stars, point.text));
                    if let Some(ref source) = point.source {
                        md.push_str(&format!(
                            "   *Source: [{}]({})*\n",
                            source.title, source.url
                        ));
                    }
                    md.push('\n');
                }
            }
            md.push_str("---\n\n");
        }

        md.push_str("## Sources\n\n");
        for (idx, source) in self.all_sources.iter().enumerate() {
            md.push_str(&format!("{}. [{}]({})", idx + 1, source.title, source.url));
            if source.is_verified() {
                md.push_str(&format!(" ⭐ Verified {}x", source.confidence));
            }
            md.push('\n');
        }

        md.push_str("\n---\n\n## Metadata\n\n");
        let total_sources = self
            .metadata
            .as_ref()
            .map(|m| m.total_sources.to_string())
            .unwrap_or_default();
        let high_confidence = self
            .metadata
            .as_ref()
            .map(|m| m.high_confidence_sources.to_string())
            .unwrap_or_default();
        let agents = self
            .execution_summary
            .as_ref()
            .map(|e| e.agents_deployed.to_string())
            .unwrap_or_default();
        let techniques = self
            .metadata
            .as_ref()
            .map(|m| m.techniques_used.join(", "))
            .unwrap_or_default();
        md.push_str(&format!("- **Total Sources:** {}\n", total_sources));
        md.push_str(&format!("- **High Confidence:** {}\n", high_confidence));
        md.push_str(&format!("- **Agents:** {}\n", agents));
        md.push_str(&format!("- **Techniques:** {}\n", techniques));

        md
    }

    /// Serializes the report as canonical pretty-printed JSON.
    ///
    /// The exact value round-trips: parsing the output yields a report equal
    /// to `self`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// An exported report ready to be written as a local download.
#[derive(Debug, Clone)]
pub struct ReportFile {
    /// Target file name, e.g. `research-1722950400000.md`
    pub filename: String,
    /// MIME type the file would be served with
    pub mime_type: &'static str,
    pub content: String,
}

impl ReportFile {
    /// Builds the Markdown export of a report, named with the current time.
    pub fn markdown(report: &ResearchReport) -> Self {
        Self::markdown_at(report, Utc::now())
    }

    /// Builds the Markdown export with an explicit timestamp.
    pub fn markdown_at(report: &ResearchReport, now: DateTime<Utc>) -> Self {
        Self {
            filename: format!("{}-{}.md", REPORT_FILE_STEM, now.timestamp_millis()),
            mime_type: MARKDOWN_MIME,
            content: report.to_markdown_at(now),
        }
    }

    /// Builds the JSON export of a report, named with the current time.
    pub fn json(report: &ResearchReport) -> Result<Self, serde_json::Error> {
        Self::json_at(report, Utc::now())
    }

    /// Builds the JSON export with an explicit timestamp.
    pub fn json_at(report: &ResearchReport, now: DateTime<Utc>) -> Result<Self, serde_json::Error> {
        Ok(Self {
            filename: format!("{}-{}.json", REPORT_FILE_STEM, now.timestamp_millis()),
            mime_type: JSON_MIME,
            content: report.to_json()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_export_file_names() {
        let report = ResearchReport::new("q", "s");
        let now = Utc.timestamp_millis_opt(1_722_950_400_000).unwrap();

        let md = ReportFile::markdown_at(&report, now);
        assert_eq!(md.filename, "research-1722950400000.md");
        assert_eq!(md.mime_type, "text/markdown");

        let json = ReportFile::json_at(&report, now).unwrap();
        assert_eq!(json.filename, "research-1722950400000.json");
        assert_eq!(json.mime_type, "application/json");
    }
}
