//! Per-generation reporting.
//!
//! The runner calls [`GenerationReporter::report`] once per generation, in
//! generation order, on the thread driving the run. Reporters should be
//! cheap: an in-memory append or a log line.

/// Summary of one evaluated generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationSummary {
    /// Zero-based generation index.
    pub generation: usize,
    /// Mean fitness over the whole population.
    pub average_fitness: f64,
    /// Best fitness under the run's direction.
    pub best_fitness: f64,
}

impl GenerationSummary {
    /// Human-readable progress line.
    pub fn progress_line(&self) -> String {
        format!(
            "Generation {}: average={:.6}, best={:.6}",
            self.generation, self.average_fitness, self.best_fitness
        )
    }
}

/// Sink for generation summaries.
///
/// Any `FnMut(&GenerationSummary, &str)` closure is a reporter.
pub trait GenerationReporter {
    /// Receives the summary and its formatted progress line.
    fn report(&mut self, summary: &GenerationSummary, line: &str);
}

impl<F> GenerationReporter for F
where
    F: FnMut(&GenerationSummary, &str),
{
    fn report(&mut self, summary: &GenerationSummary, line: &str) {
        self(summary, line)
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl GenerationReporter for NullReporter {
    fn report(&mut self, _summary: &GenerationSummary, _line: &str) {}
}

/// Forwards progress lines to the `log` facade at info level.
#[derive(Debug, Clone)]
pub struct LogReporter {
    target: String,
}

impl LogReporter {
    /// Logs at `info` level under `target`.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

impl Default for LogReporter {
    fn default() -> Self {
        Self::new(module_path!())
    }
}

impl GenerationReporter for LogReporter {
    fn report(&mut self, _summary: &GenerationSummary, line: &str) {
        log::info!(target: self.target.as_str(), "{line}");
    }
}

/// Keeps every summary and line in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryReporter {
    pub summaries: Vec<GenerationSummary>,
    pub lines: Vec<String>,
}

impl MemoryReporter {
    /// An empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Best fitness of each reported generation, in order.
    pub fn best_fitness_history(&self) -> Vec<f64> {
        self.summaries.iter().map(|s| s.best_fitness).collect()
    }
}

impl GenerationReporter for MemoryReporter {
    fn report(&mut self, summary: &GenerationSummary, line: &str) {
        self.summaries.push(*summary);
        self.lines.push(line.to_owned());
    }
}
