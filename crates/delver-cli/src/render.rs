use delver_core::client::HealthStatus;
use delver_core::report::ResearchReport;

/// Canned queries shown by `delver examples`.
const EXAMPLE_QUERIES: &[&str] = &[
    "Analyze the competitive landscape of AI agents in 2024",
    "Latest developments in quantum computing",
    "Electric vehicle market trends 2024",
    "Impact of generative AI on software development",
    "Future of renewable energy technologies",
    "Blockchain adoption in enterprise 2024",
];

/// Renders a full report to the terminal.
///
/// Reads the immutable report only; nothing here mutates session state.
pub fn print_report(report: &ResearchReport) {
    print_metrics(report);

    if let Some(ref planning) = report.planning {
        println!("\nResearch Strategy: {}", planning.decomposition_strategy);
        for (idx, dim) in planning.dimensions.iter().enumerate() {
            println!(
                "  Agent {}: {} ({} searches)",
                idx + 1,
                dim.aspect,
                dim.queries.len()
            );
            println!("    {}", dim.rationale);
        }
    }

    println!("\nExecutive Summary\n");
    println!("{}", report.executive_summary);

    for (idx, section) in report.sections.iter().enumerate() {
        println!(
            "\n{}. {} [{} sources, {} verified]",
            idx + 1,
            section.title,
            section.source_count,
            section.high_confidence_count
        );
        println!("{}", section.content);

        if !section.key_points.is_empty() {
            println!("\n  Key findings:");
            for point in &section.key_points {
                let stars = if point.is_high_confidence { "⭐⭐" } else { "⭐" };
                println!("  {} {}", stars, point.text);
                if let Some(ref source) = point.source {
                    println!("     source: {} <{}>", source.title, source.url);
                }
            }
        }
    }

    println!("\nSources ({})", report.all_sources.len());
    for (idx, source) in report.all_sources.iter().enumerate() {
        let badge = if source.is_verified() {
            format!(" ⭐ {}x", source.confidence)
        } else {
            String::new()
        };
        println!("  {}. {}{} <{}>", idx + 1, source.title, badge, source.url);
        if let Some(ref snippet) = source.snippet {
            println!("     {}", snippet);
        }
    }

    if let Some(ref verification) = report.verification {
        println!("\nVerification");
        for item in verification {
            println!("  ✔ {}", item.claim);
            if !item.supported_by.is_empty() {
                println!("    supported by: {}", item.supported_by.join(", "));
            }
        }
    }

    if let Some(ref metadata) = report.metadata {
        if !metadata.techniques_used.is_empty() {
            println!("\nTechniques: {}", metadata.techniques_used.join(", "));
        }
    }
    println!();
}

fn print_metrics(report: &ResearchReport) {
    let agents = report
        .execution_summary
        .as_ref()
        .map(|e| e.agents_deployed)
        .unwrap_or(0);
    let sources = report
        .metadata
        .as_ref()
        .map(|m| m.total_sources)
        .unwrap_or(0);
    let verified = report
        .metadata
        .as_ref()
        .map(|m| m.high_confidence_sources)
        .unwrap_or(0);
    let searches = report
        .planning
        .as_ref()
        .map(|p| p.total_searches)
        .unwrap_or(0);
    let time = report
        .execution_summary
        .as_ref()
        .map(|e| e.processing_time)
        .unwrap_or(0.0);

    println!(
        "\nAgents: {}  Sources: {}  Verified: {}  Searches: {}  Time: {}s",
        agents, sources, verified, searches, time
    );
}

pub fn print_health(health: &HealthStatus, base_url: &str) {
    println!("Backend at {} is {}", base_url, health.status);
    if let Some(ref model) = health.model {
        println!("  model: {}", model);
    }
    if let Some(agents) = health.max_parallel_agents {
        println!("  max parallel agents: {}", agents);
    }
    if let Some(configured) = health.openrouter_configured {
        println!("  openrouter configured: {}", configured);
    }
    if let Some(configured) = health.serpapi_configured {
        println!("  serpapi configured: {}", configured);
    }
}

pub fn print_examples() {
    println!("Try one of these:");
    for example in EXAMPLE_QUERIES {
        println!("  delver run \"{}\"", example);
    }
}
