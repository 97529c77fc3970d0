//! Package processing pipeline.
//!
//! Each package goes through dispatch, metric calculation and formatting, and
//! the resulting summary is handed to a sink. Packages are processed one at a
//! time in input order.

use crate::{build_activity, Error, InfoMessage, Package, Result, SummarySink, Training};
use std::fmt;

/// Options controlling a processing run
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// Abort on the first failing package instead of skipping it
    pub fail_fast: bool,
}

/// A package that could not be processed
#[derive(Debug)]
pub struct PackageFailure {
    /// Position of the package in the input
    pub index: usize,
    pub tag: String,
    pub error: Error,
}

impl fmt::Display for PackageFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "package {} ({}): {}", self.index, self.tag, self.error)
    }
}

impl From<PackageFailure> for Error {
    fn from(failure: PackageFailure) -> Self {
        Error::Package {
            index: failure.index,
            tag: failure.tag,
            source: Box::new(failure.error),
        }
    }
}

/// Outcome of a run that was not aborted
#[derive(Debug, Default)]
pub struct RunReport {
    pub summaries: Vec<InfoMessage>,
    pub failures: Vec<PackageFailure>,
}

impl RunReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Turn one package into its summary
pub fn process_package(package: &Package) -> Result<InfoMessage> {
    let activity = build_activity(&package.tag, &package.values)?;
    Ok(activity.summary())
}

/// Process packages in order, emitting every summary to `sink`
///
/// Invalid packages are recorded in the report and skipped. With
/// `fail_fast` the first invalid package ends the run with
/// [`Error::Package`], which names the package like a skipped failure does.
/// Sink errors always end the run.
pub fn run(
    packages: &[Package],
    sink: &mut dyn SummarySink,
    options: &RunOptions,
) -> Result<RunReport> {
    let mut report = RunReport::default();

    for (index, package) in packages.iter().enumerate() {
        match process_package(package) {
            Ok(summary) => {
                sink.emit(&summary)?;
                report.summaries.push(summary);
            }
            Err(error) => {
                let failure = PackageFailure {
                    index,
                    tag: package.tag.clone(),
                    error,
                };
                if options.fail_fast {
                    tracing::error!("Aborting run: {}", failure);
                    return Err(failure.into());
                }
                tracing::warn!("Skipping {}", failure);
                report.failures.push(failure);
            }
        }
    }

    tracing::info!(
        "Processed {} packages: {} summaries, {} failures",
        packages.len(),
        report.summaries.len(),
        report.failures.len()
    );
    Ok(report)
}
