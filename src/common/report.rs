use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::common::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    pub step: String,
    pub output_path: Option<PathBuf>,
    pub width: usize,
    pub height: usize,
    pub elapsed_ms: u64,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_steps: usize,
    pub total_elapsed_ms: u64,
    pub slowest_step: Option<String>,
    pub files_written: usize,
}

/// Timing and outcome of one pipeline run, exported as JSON.
#[derive(Debug)]
pub struct RunReport {
    input: PathBuf,
    start_time: Instant,
    steps: Vec<StepRecord>,
    hidden_message: Option<String>,
    recovered_message: Option<String>,
    null_message: Option<String>,
}

impl RunReport {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            start_time: Instant::now(),
            steps: Vec::new(),
            hidden_message: None,
            recovered_message: None,
            null_message: None,
        }
    }

    pub fn record_step(
        &mut self,
        step: &str,
        output_path: Option<&Path>,
        dimensions: (usize, usize),
        elapsed: Duration,
    ) {
        self.steps.push(StepRecord {
            step: step.to_string(),
            output_path: output_path.map(Path::to_path_buf),
            width: dimensions.0,
            height: dimensions.1,
            elapsed_ms: elapsed.as_millis() as u64,
        });
    }

    pub fn record_messages(&mut self, hidden: &str, recovered: &str, null: &str) {
        self.hidden_message = Some(hidden.to_string());
        self.recovered_message = Some(recovered.to_string());
        self.null_message = Some(null.to_string());
    }

    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    pub fn summarize(&self) -> ReportSummary {
        let mut summary = ReportSummary {
            total_steps: self.steps.len(),
            ..Default::default()
        };

        summary.total_elapsed_ms = self.steps.iter().map(|s| s.elapsed_ms).sum();
        summary.files_written = self.steps.iter().filter(|s| s.output_path.is_some()).count();
        summary.slowest_step = self
            .steps
            .iter()
            .max_by_key(|s| s.elapsed_ms)
            .map(|s| s.step.clone());

        summary
    }

    pub fn export_to_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let output = serde_json::json!({
            "input": self.input,
            "run_duration_ms": self.start_time.elapsed().as_millis() as u64,
            "steps": self.steps,
            "hidden_message": self.hidden_message,
            "recovered_message": self.recovered_message,
            "null_message": self.null_message,
            "summary": self.summarize(),
        });

        let json_string = serde_json::to_string_pretty(&output)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        let mut file = File::create(path)?;
        file.write_all(json_string.as_bytes())?;

        Ok(())
    }
}
