//! Token usage tracking across completion calls and models.

use std::collections::BTreeMap;

use crate::TokenUsage;

/// Tracks cumulative token usage per model for one session.
#[derive(Debug, Clone, Default)]
pub struct UsageTracker {
    total: TokenUsage,
    by_model: BTreeMap<String, TokenUsage>,
    call_count: u64,
}

impl UsageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record token usage from a successful completion call.
    pub fn record(&mut self, model: &str, usage: &TokenUsage) {
        add(&mut self.total, usage);
        add(self.by_model.entry(model.to_string()).or_default(), usage);
        self.call_count += 1;
    }

    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    pub fn for_model(&self, model: &str) -> Option<&TokenUsage> {
        self.by_model.get(model)
    }

    /// Usage per model, ordered by model name.
    pub fn models(&self) -> impl Iterator<Item = (&str, &TokenUsage)> {
        self.by_model.iter().map(|(m, u)| (m.as_str(), u))
    }

    pub fn call_count(&self) -> u64 {
        self.call_count
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn add(acc: &mut TokenUsage, usage: &TokenUsage) {
    acc.prompt_tokens = acc.prompt_tokens.saturating_add(usage.prompt_tokens);
    acc.completion_tokens = acc.completion_tokens.saturating_add(usage.completion_tokens);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(prompt: u64, completion: u64) -> TokenUsage {
        TokenUsage {
            prompt_tokens: prompt,
            completion_tokens: completion,
        }
    }

    #[test]
    fn records_totals_and_per_model() {
        let mut tracker = UsageTracker::new();
        tracker.record("gpt-4o-mini", &usage(10, 5));
        tracker.record("gpt-4o", &usage(20, 8));
        tracker.record("gpt-4o-mini", &usage(30, 2));

        assert_eq!(tracker.call_count(), 3);
        assert_eq!(tracker.total().total_tokens(), 75);
        assert_eq!(tracker.for_model("gpt-4o-mini"), Some(&usage(40, 7)));
        assert!(tracker.for_model("gpt-3.5-turbo").is_none());

        let models: Vec<_> = tracker.models().map(|(m, _)| m).collect();
        assert_eq!(models, vec!["gpt-4o", "gpt-4o-mini"]);
    }

    #[test]
    fn reset_clears_everything() {
        let mut tracker = UsageTracker::new();
        tracker.record("gpt-4o", &usage(1, 1));
        tracker.reset();
        assert_eq!(tracker.call_count(), 0);
        assert_eq!(tracker.total().total_tokens(), 0);
        assert_eq!(tracker.models().count(), 0);
    }
}
