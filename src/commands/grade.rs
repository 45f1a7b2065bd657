//! One-shot grade estimate from image files

use std::path::PathBuf;

use anyhow::Context;

use vcv::adapters::file::FileImageSource;
use vcv::core::models::CaptureSlot;
use vcv::core::ports::ImageSource;
use vcv::core::services::CaptureSession;
use vcv::output::{GradeReport, OutputMode};

/// Image files named on the command line
#[derive(Debug, Default)]
pub struct GradeFiles {
    /// Front, top-down
    pub front_top: Option<PathBuf>,
    /// Back, top-down
    pub back_top: Option<PathBuf>,
    /// Front, angled
    pub front_angle: Option<PathBuf>,
    /// Directory to discover slot images in
    pub dir: Option<PathBuf>,
}

impl GradeFiles {
    fn explicit(&self) -> [(CaptureSlot, Option<&PathBuf>); 3] {
        [
            (CaptureSlot::FrontTop, self.front_top.as_ref()),
            (CaptureSlot::BackTop, self.back_top.as_ref()),
            (CaptureSlot::FrontAngle, self.front_angle.as_ref()),
        ]
    }
}

/// Capture the given files and print the estimate
///
/// Files named explicitly take precedence over images found in `--dir`.
/// Missing slots produce the incomplete-capture result, not an error.
pub fn grade(files: &GradeFiles, mode: OutputMode) -> anyhow::Result<()> {
    let source = FileImageSource::new();
    let mut session = CaptureSession::new();

    if let Some(dir) = &files.dir {
        let found = source
            .load_dir(dir)
            .with_context(|| format!("cannot read captures from {}", dir.display()))?;
        for (slot, payload) in found {
            session.capture_image(slot, payload)?;
        }
    }

    for (slot, path) in files.explicit() {
        if let Some(path) = path {
            let payload = source.load(path)?;
            session.capture_image(slot, payload)?;
        }
    }

    let result = session.request_grade();
    log::debug!("graded {} capture(s)", session.images().len());

    GradeReport { result }.render(mode);
    Ok(())
}
