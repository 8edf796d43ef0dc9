//! Periodic cooking-tip scheduling.
//!
//! The only rate limiting anywhere in the system, and it governs how often the
//! user is shown a tip, not the generation backend. The scheduler re-arms after
//! every completed or failed attempt, bounded by a lifetime maximum and a
//! maximum per rolling window.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::ai::generate_cooking_tip;
use crate::llm::GenerationClient;

/// Lifetime maximum number of tips.
pub const MAX_TIPS: usize = 25;

/// Maximum tips within one rolling window.
pub const MAX_TIPS_PER_WINDOW: usize = 8;

/// Length of the rolling window.
pub const TIP_WINDOW: Duration = Duration::from_secs(30 * 60);

/// Delay between attempts.
pub const TIP_INTERVAL: Duration = Duration::from_secs(2 * 60);

/// Bounds on tip delivery.
#[derive(Debug, Clone)]
pub struct TipPolicy {
    pub max_total: usize,
    pub max_per_window: usize,
    pub window: Duration,
    pub interval: Duration,
}

impl Default for TipPolicy {
    fn default() -> Self {
        Self {
            max_total: MAX_TIPS,
            max_per_window: MAX_TIPS_PER_WINDOW,
            window: TIP_WINDOW,
            interval: TIP_INTERVAL,
        }
    }
}

impl TipPolicy {
    /// Whether a tip may fire given how many have been shown in total and how
    /// many fired within the current window.
    pub fn eligible(&self, shown_count: usize, fired_in_window: usize) -> bool {
        shown_count < self.max_total && fired_in_window < self.max_per_window
    }
}

/// Re-arming tip loop. Each cycle waits the interval, checks eligibility,
/// generates one tip with the accumulated history as exclusion text and
/// delivers it over the channel. A failed generation just re-arms.
pub struct TipScheduler {
    client: Arc<dyn GenerationClient>,
    policy: TipPolicy,
    shown: Vec<String>,
    fired_at: Vec<Instant>,
}

impl TipScheduler {
    pub fn new(client: Arc<dyn GenerationClient>, policy: TipPolicy) -> Self {
        Self {
            client,
            policy,
            shown: Vec::new(),
            fired_at: Vec::new(),
        }
    }

    /// Seed the scheduler with tips already shown in earlier sessions.
    pub fn with_history(mut self, shown: Vec<String>) -> Self {
        self.shown = shown;
        self
    }

    /// Start the loop on the runtime. The loop ends when the lifetime maximum
    /// is reached or the receiver is dropped; in-flight generation is never
    /// cancelled, its result is simply discarded.
    pub fn spawn(mut self) -> mpsc::Receiver<String> {
        let (tx, rx) = mpsc::channel(8);
        tokio::spawn(async move {
            self.run(tx).await;
        });
        rx
    }

    async fn run(&mut self, tx: mpsc::Sender<String>) {
        loop {
            tokio::time::sleep(self.policy.interval).await;

            if self.shown.len() >= self.policy.max_total {
                tracing::debug!("Tip limit reached, stopping scheduler");
                return;
            }

            let now = Instant::now();
            self.fired_at
                .retain(|fired| now.duration_since(*fired) < self.policy.window);

            if !self.policy.eligible(self.shown.len(), self.fired_at.len()) {
                // Window cap hit: skip this cycle, re-arm
                continue;
            }

            match generate_cooking_tip(self.client.as_ref(), &self.shown).await {
                Ok(tip) => {
                    self.fired_at.push(Instant::now());
                    self.shown.push(tip.clone());
                    if tx.send(tip).await.is_err() {
                        return;
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Cooking tip generation failed, re-arming");
                }
            }
        }
    }
}
