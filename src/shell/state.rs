//! Shell State
//!
//! The four pieces of view state (input text, last result, loading flag,
//! error message) and the transitions between them.

use crate::analysis::{NightAnalysis, NightAnalyzer, Reflection, SleepMetrics};
use crate::card::{render, NightCard};

/// View state of the shell
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShellState {
    /// Text currently in the input area
    pub input: String,
    /// Last successful analysis
    pub result: Option<NightAnalysis>,
    /// True while a request is outstanding
    pub loading: bool,
    /// Message for the error region
    pub error: Option<String>,
}

impl ShellState {
    /// Fresh state with the given input text
    pub fn with_input(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Default::default()
        }
    }

    /// Replace the input text
    pub fn edit(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Handle the trigger.
    ///
    /// Returns the reflection to analyze, or `None` when nothing should be
    /// sent: a request is already outstanding, or the input is blank (in
    /// which case the error region explains why).
    pub fn submit(&mut self) -> Option<Reflection> {
        if self.loading {
            return None;
        }

        match Reflection::new(&self.input) {
            Ok(reflection) => {
                self.error = None;
                self.result = None;
                self.loading = true;
                Some(reflection)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// The outstanding request produced an analysis
    pub fn succeed(&mut self, analysis: NightAnalysis) {
        self.result = Some(analysis);
        self.error = None;
        self.loading = false;
    }

    /// The outstanding request failed
    pub fn fail(&mut self, message: impl Into<String>) {
        self.result = None;
        self.error = Some(message.into());
        self.loading = false;
    }

    /// Card for the current result, if there is one
    pub fn card(&self) -> Option<NightCard> {
        self.result.as_ref().map(render)
    }

    /// Submit, await the analyzer, and record the outcome
    pub async fn run(&mut self, analyzer: &dyn NightAnalyzer, metrics: Option<&SleepMetrics>) {
        let Some(reflection) = self.submit() else {
            return;
        };

        match analyzer.analyze(&reflection, metrics).await {
            Ok(analysis) => self.succeed(analysis),
            Err(e) => {
                tracing::warn!(kind = e.kind(), error = %e, "Night analysis failed");
                self.fail(e.user_message());
            }
        }
    }
}
