//! Progress and timing reports
//!
//! The pipeline talks to a `Reporter` instead of checking verbosity flags
//! itself. Silent runs use `NullReporter`.

use std::time::Instant;

/// Pipeline phase, used to label timing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    ParseInput,
    FindIncludes,
    Inline,
    WriteOutput,
}

impl Phase {
    /// Label used in "Finished ..." timing lines
    pub fn label(self) -> &'static str {
        match self {
            Phase::ParseInput => "parsing input",
            Phase::FindIncludes => "finding include tags",
            Phase::Inline => "inlining included files",
            Phase::WriteOutput => "writing output",
        }
    }
}

/// Receiver for pipeline progress. Every method defaults to doing nothing.
pub trait Reporter {
    /// A phase is about to start
    fn phase_started(&mut self, _description: &str) {}

    /// A phase finished; `summary` describes what was done
    fn phase_finished(&mut self, _phase: Phase, _summary: &str) {}

    /// `done` of `total` includes have been resolved
    fn progress(&mut self, _done: usize, _total: usize) {}
}

/// Reporter that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// How often progress is reported: every tenth of the work, at least every item
pub fn report_frequency(total: usize) -> usize {
    (total / 10).max(1)
}

/// Prints verbose messages and benchmark timings to stdout
#[derive(Debug)]
pub struct ConsoleReporter {
    verbose: bool,
    benchmark: bool,
    started: Instant,
    last_phase: Instant,
    last_progress: Instant,
}

impl ConsoleReporter {
    /// `started` is when the process began; the first phase is timed from it
    pub fn new(started: Instant, verbose: bool, benchmark: bool) -> Self {
        Self {
            verbose,
            benchmark,
            started,
            last_phase: started,
            last_progress: started,
        }
    }
}

impl Reporter for ConsoleReporter {
    fn phase_started(&mut self, description: &str) {
        if self.verbose {
            println!("{}", description);
        }
        self.last_progress = Instant::now();
    }

    fn phase_finished(&mut self, phase: Phase, summary: &str) {
        if self.verbose {
            println!("DONE: {}", summary);
        }
        if self.benchmark {
            let now = Instant::now();
            println!(
                "Finished {}: {:.2}s",
                phase.label(),
                now.duration_since(self.last_phase).as_secs_f64()
            );
            if phase == Phase::WriteOutput {
                println!(
                    "Total time: {:.2}s",
                    now.duration_since(self.started).as_secs_f64()
                );
            }
            self.last_phase = now;
        }
    }

    fn progress(&mut self, done: usize, total: usize) {
        if !self.verbose || total == 0 {
            return;
        }
        let frequency = report_frequency(total);
        if done % frequency != 0 {
            return;
        }

        let percent = done as f64 / total as f64 * 100.0;
        if self.benchmark {
            let now = Instant::now();
            let freq_percent = frequency as f64 / total as f64 * 100.0;
            println!(
                "  ({:.1}%) Processed {} of {} include tags. Last {:.1}% took {:.2}s",
                percent,
                done,
                total,
                freq_percent,
                now.duration_since(self.last_progress).as_secs_f64()
            );
            self.last_progress = now;
        } else {
            println!(
                "  ({:.1}%) Processed {} of {} include tags.",
                percent, done, total
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_report_frequency() {
        assert_eq!(report_frequency(0), 1);
        assert_eq!(report_frequency(3), 1);
        assert_eq!(report_frequency(10), 1);
        assert_eq!(report_frequency(25), 2);
        assert_eq!(report_frequency(1000), 100);
    }

    #[test]
    fn test_console_reporter_times_from_process_start() {
        let started = Instant::now();
        std::thread::sleep(Duration::from_millis(20));
        let mut reporter = ConsoleReporter::new(started, false, true);
        assert_eq!(reporter.last_phase, started);

        reporter.phase_finished(Phase::ParseInput, "Parsing input file: in.xml");
        assert!(reporter.last_phase.duration_since(started) >= Duration::from_millis(20));
        assert_eq!(reporter.started, started);
    }

    #[test]
    fn test_phase_labels() {
        assert_eq!(Phase::ParseInput.label(), "parsing input");
        assert_eq!(Phase::WriteOutput.label(), "writing output");
    }
}
