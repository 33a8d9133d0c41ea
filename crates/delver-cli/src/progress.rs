use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::task::JoinHandle;

/// Stage messages rotated while a request is in flight.
const STAGES: &[&str] = &[
    "Initializing research system...",
    "Decomposing query with Chain of Thought...",
    "Launching multi-agent search...",
    "Agent 1: Executing searches...",
    "Agent 2: Executing searches...",
    "Agent 3: Executing searches...",
    "Applying Self-Consistency validation...",
    "Extracting insights from sources...",
    "Generating comprehensive report with LLM...",
    "Formatting citations and sources...",
    "Finalizing research report...",
];

const PERCENT_TICK: Duration = Duration::from_secs(1);
const STAGE_TICK: Duration = Duration::from_secs(7);

/// Progress cosmetics for one in-flight request.
///
/// The backend reports no real progress, so two periodic tasks fake it:
/// a percentage ticker that creeps to 95% and parks there, and a stage
/// rotator cycling through [`STAGES`]. Both are aborted when the request
/// settles; dropping the ticker aborts them as well, so they cannot
/// outlive the submission on any path.
pub struct ProgressTicker {
    bar: ProgressBar,
    percent: JoinHandle<()>,
    stages: JoinHandle<()>,
}

impl ProgressTicker {
    pub fn start() -> Self {
        let bar = ProgressBar::new(100);
        bar.set_style(
            ProgressStyle::with_template("{msg}\n{wide_bar} {pos}%")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_message(STAGES[0]);

        let percent_bar = bar.clone();
        let percent = tokio::spawn(async move {
            let mut tick = tokio::time::interval(PERCENT_TICK);
            loop {
                tick.tick().await;
                if percent_bar.position() < 95 {
                    percent_bar.inc(2);
                }
            }
        });

        let stage_bar = bar.clone();
        let stages = tokio::spawn(async move {
            let mut tick = tokio::time::interval(STAGE_TICK);
            // The first interval tick completes immediately; consume it so
            // the opening stage stays visible for a full period.
            tick.tick().await;
            for stage in &STAGES[1..] {
                tick.tick().await;
                stage_bar.set_message(*stage);
            }
        });

        Self {
            bar,
            percent,
            stages,
        }
    }

    /// Stops both tickers and closes out the bar. Called at the single
    /// point where the request settles, success or failure.
    pub fn finish(self, success: bool) {
        self.percent.abort();
        self.stages.abort();
        if success {
            self.bar.set_position(100);
            self.bar.finish_with_message("Research complete");
        } else {
            self.bar.abandon_with_message("Research failed");
        }
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.percent.abort();
        self.stages.abort();
    }
}
