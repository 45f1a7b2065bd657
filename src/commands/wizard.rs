//! Interactive capture wizard
//!
//! Reads one command per line and drives a [`CaptureSession`]. A bad line,
//! including one that is not UTF-8, is reported and the session carries on;
//! EOF or `quit` ends it. Captures are kept in memory only.

use std::io::BufRead;
use std::path::Path;

use vcv::adapters::file::FileImageSource;
use vcv::core::models::{CaptureSlot, WizardStep};
use vcv::core::ports::ImageSource;
use vcv::core::services::CaptureSession;
use vcv::output::{GradeReport, OperationResult, OutputMode, SessionView};

const HELP: &str = "\
Commands:
  status                  Show the wizard state
  capture [<slot>] <path> Capture an image (slot defaults to the current step)
  step <step>             Jump to a step (front_top, back_top, front_angle, review)
  back                    Go back one step
  grade                   Run the grade estimate
  reset                   Start over
  help                    Show this help
  quit                    Leave the wizard";

/// A parsed wizard line
#[derive(Debug, Clone, PartialEq, Eq)]
enum WizardCommand {
    Status,
    Capture { slot: Option<CaptureSlot>, path: String },
    Step(WizardStep),
    Back,
    Grade,
    Reset,
    Help,
    Quit,
}

impl WizardCommand {
    /// Parse a line; `Ok(None)` for blank lines
    fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match word.to_lowercase().as_str() {
            "status" | "s" => Self::Status,
            "capture" | "c" => Self::parse_capture(rest)?,
            "step" | "jump" => {
                if rest.is_empty() {
                    return Err("step needs a step name".to_string());
                }
                Self::Step(rest.parse::<WizardStep>().map_err(|e| e.to_string())?)
            },
            "back" | "b" => Self::Back,
            "grade" | "g" => Self::Grade,
            "reset" => Self::Reset,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(format!("unknown command: {other} (try 'help')")),
        };
        Ok(Some(command))
    }

    fn parse_capture(rest: &str) -> Result<Self, String> {
        if rest.is_empty() {
            return Err("capture needs an image path".to_string());
        }

        if let Some((first, path)) = rest.split_once(char::is_whitespace)
            && let Ok(slot) = first.parse::<CaptureSlot>()
        {
            return Ok(Self::Capture {
                slot: Some(slot),
                path: path.trim().to_string(),
            });
        }

        Ok(Self::Capture {
            slot: None,
            path: rest.to_string(),
        })
    }
}

/// Run the wizard over a line-oriented input
pub fn wizard<R: BufRead>(mut input: R, mode: OutputMode) -> anyhow::Result<()> {
    let source = FileImageSource::new();
    let mut session = CaptureSession::new();

    if mode == OutputMode::Human {
        println!("GaaS - Grading as a Service (Demo)");
        println!("Type 'help' for commands.\n");
        SessionView::from_session(&session).render(mode);
    }

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let Ok(line) = std::str::from_utf8(&buf) else {
            OperationResult::failed("line is not valid UTF-8, ignored").render(mode);
            continue;
        };

        let command = match WizardCommand::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(msg) => {
                OperationResult::failed(msg).render(mode);
                continue;
            },
        };

        if command == WizardCommand::Quit {
            break;
        }
        execute(&command, &mut session, &source, mode);
    }

    Ok(())
}

fn execute(
    command: &WizardCommand,
    session: &mut CaptureSession,
    source: &impl ImageSource,
    mode: OutputMode,
) {
    match command {
        WizardCommand::Status => SessionView::from_session(session).render(mode),
        WizardCommand::Capture { slot, path } => {
            let result = match capture(session, source, *slot, Path::new(path)) {
                Ok(message) => OperationResult::ok(message),
                Err(message) => OperationResult::failed(message),
            };
            result.render(mode);
        },
        WizardCommand::Step(step) => {
            session.jump(*step);
            OperationResult::ok(describe_step(*step)).render(mode);
        },
        WizardCommand::Back => {
            let step = session.back();
            OperationResult::ok(describe_step(step)).render(mode);
        },
        WizardCommand::Grade => {
            let result = session.request_grade();
            GradeReport { result }.render(mode);
        },
        WizardCommand::Reset => {
            session.reset();
            OperationResult::ok(format!("Session reset. {}", describe_step(session.current_step())))
                .render(mode);
        },
        WizardCommand::Help => {
            if mode == OutputMode::Json {
                OperationResult::ok(HELP).render(mode);
            } else {
                println!("{HELP}");
            }
        },
        WizardCommand::Quit => {},
    }
}

fn capture(
    session: &mut CaptureSession,
    source: &impl ImageSource,
    slot: Option<CaptureSlot>,
    path: &Path,
) -> Result<String, String> {
    let slot = slot.or_else(|| session.current_step().slot()).ok_or_else(|| {
        "the review step has no capture slot; name one (front_top, back_top, front_angle)"
            .to_string()
    })?;

    let payload = source.load(path).map_err(|e| e.to_string())?;
    let step = session.capture_image(slot, payload).map_err(|e| e.to_string())?;

    Ok(format!("Captured {}. {}", slot.display_name(), describe_step(step)))
}

fn describe_step(step: WizardStep) -> String {
    format!("Now on {}: {}", step.label(), step.short_name())
}
