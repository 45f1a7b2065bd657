//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{CaptureSlot, GradingResult, LinkStatus, Platform, SubScores, WizardStep};
use crate::core::services::{CaptureSession, Navigator};

/// Width of a score bar in characters
const BAR_WIDTH: usize = 20;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Render a score in `[0, 10]` as a text bar
#[must_use]
pub fn score_bar(score: f64) -> String {
    // Clamped to [0, BAR_WIDTH] before the cast.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    let filled = ((score.clamp(0.0, 10.0) / 10.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// A grade estimate, ready for display
#[derive(Debug, Serialize)]
pub struct GradeReport {
    /// The estimate itself
    #[serde(flatten)]
    pub result: GradingResult,
}

impl GradeReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        let label = &self.result.predicted_grade;
        if self.result.is_incomplete() {
            println!("{}", label.yellow().bold());
        } else {
            println!("{}", label.green().bold());
        }
        println!();

        render_scores(&self.result.sub_scores);

        println!();
        println!("Notes:");
        for note in &self.result.notes {
            println!("  - {note}");
        }
    }
}

fn render_scores(scores: &SubScores) {
    for (name, score) in scores.categories() {
        println!("  {name:<10} {} {score:>4.1}", score_bar(score));
    }
}

/// One row of the platform listing
#[derive(Debug, Serialize)]
pub struct PlatformEntry {
    /// The platform
    #[serde(flatten)]
    pub platform: Platform,
    /// Whether it can be navigated to
    pub link: LinkStatus,
}

/// Result of a platform listing
#[derive(Debug, Serialize)]
pub struct PlatformList {
    /// Portal heading
    pub title: String,
    /// Portal sub-heading
    pub subtitle: String,
    /// Platforms in display order
    pub platforms: Vec<PlatformEntry>,
}

impl PlatformList {
    /// Build a listing from a navigator
    #[must_use]
    pub fn from_navigator(title: &str, subtitle: &str, navigator: &Navigator) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            platforms: navigator
                .platforms()
                .iter()
                .map(|p| PlatformEntry {
                    platform: p.clone(),
                    link: navigator.status(p),
                })
                .collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("{}", self.title.bold());
        println!("{}\n", self.subtitle);

        if self.platforms.is_empty() {
            println!("No platforms configured.");
            return;
        }

        for entry in &self.platforms {
            let p = &entry.platform;
            println!("  [{}] {}", p.id, p.title);
            if !p.description.is_empty() {
                println!("      {}", p.description);
            }
            match &entry.link {
                LinkStatus::Ready { url } => println!("      -> {url}"),
                LinkStatus::NotConfigured { reason } => {
                    println!("      {}", format!("not configured ({reason})").yellow());
                },
            }
        }
    }
}

/// Snapshot of one capture slot
#[derive(Debug, Serialize)]
pub struct SlotView {
    /// Slot id
    pub slot: CaptureSlot,
    /// Human-readable slot name
    pub name: &'static str,
    /// Whether an image is stored
    pub captured: bool,
    /// Image size in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<usize>,
    /// Image MIME type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Where the image came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// When it was captured (RFC3339)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captured_at: Option<String>,
}

/// One entry of the wizard stepper
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StepView {
    /// Step id
    pub step: WizardStep,
    /// Stepper label
    pub label: &'static str,
    /// Short step name
    pub name: &'static str,
    /// Whether the step lies before the active one
    pub completed: bool,
}

/// Snapshot of a capture session
#[derive(Debug, Serialize)]
pub struct SessionView {
    /// Active step
    pub step: WizardStep,
    /// Active step's stepper label
    pub step_label: &'static str,
    /// Active step's heading
    pub description: &'static str,
    /// Fraction of the wizard reached
    pub progress: f64,
    /// Every step, in order
    pub steps: Vec<StepView>,
    /// Whether all three captures are present
    pub ready_for_grade: bool,
    /// Per-slot state
    pub slots: Vec<SlotView>,
    /// Last grade, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GradingResult>,
}

impl SessionView {
    /// Capture the current state of a session
    #[must_use]
    pub fn from_session(session: &CaptureSession) -> Self {
        let step = session.current_step();
        let slots = CaptureSlot::ALL
            .into_iter()
            .map(|slot| {
                let entry = session.images().entry(slot);
                SlotView {
                    slot,
                    name: slot.display_name(),
                    captured: entry.is_some(),
                    bytes: entry.map(|e| e.payload.len()),
                    mime_type: entry.map(|e| e.payload.mime_type().to_string()),
                    origin: entry.and_then(|e| e.payload.origin().map(String::from)),
                    captured_at: entry.map(|e| e.captured_at.clone()),
                }
            })
            .collect();

        let steps = WizardStep::ALL
            .into_iter()
            .map(|s| StepView {
                step: s,
                label: s.label(),
                name: s.short_name(),
                completed: session.is_completed(s),
            })
            .collect();

        Self {
            step,
            step_label: step.label(),
            description: step.description(),
            progress: session.progress(),
            steps,
            ready_for_grade: session.is_ready_for_grade(),
            slots,
            result: session.last_result().cloned(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        let stepper: Vec<String> = self
            .steps
            .iter()
            .map(|s| {
                let text = format!("{}: {}", s.label, s.name);
                if s.step == self.step {
                    format!("[{}]", text.bold())
                } else if s.completed {
                    format!(" {} ", format!("{text} (done)").green())
                } else {
                    format!(" {text} ")
                }
            })
            .collect();
        println!("{}", stepper.join(" "));
        println!("Progress: {}", score_bar(self.progress * 10.0));
        println!();
        println!("{}", self.description.bold());
        println!("{}", self.step.instructions());
        println!();

        for slot in &self.slots {
            if slot.captured {
                println!(
                    "  {:<17} {} ({} bytes)",
                    slot.name,
                    slot.origin.as_deref().unwrap_or("captured"),
                    slot.bytes.unwrap_or_default()
                );
            } else {
                println!("  {:<17} {}", slot.name, "Not captured yet".dimmed());
            }
        }

        println!();
        if self.ready_for_grade {
            println!("{}", "All captures in place. Type 'grade' for an estimate.".green());
        } else {
            println!("{}", "Capture all three images to grade.".dimmed());
        }

        if let Some(result) = &self.result {
            println!();
            println!("Last estimate: {}", result.predicted_grade);
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// A successful operation
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// A failed operation
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
