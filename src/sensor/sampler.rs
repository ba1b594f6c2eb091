//! WeightSampler: raw serial lines in, numeric weight samples out.
//!
//! The controller firmware usually prefixes readings with a label
//! (`Load_cell output val: 123.4`) but occasionally emits bare numbers or
//! noise. Parse failures never invent a discontinuity: the sampler carries
//! the last accepted weight forward and marks the sample as stale.

use crate::sensor::link::SerialLink;
use crate::types::{WeightSample, LOAD_CELL_LABEL};

/// Owns the transport and the last successfully parsed weight.
pub struct WeightSampler<L> {
    link: L,
    last_weight: f64,
}

impl<L: SerialLink> WeightSampler<L> {
    pub fn new(link: L) -> Self {
        Self {
            link,
            last_weight: 0.0,
        }
    }

    /// Last successfully parsed weight (initially 0).
    pub fn last_weight(&self) -> f64 {
        self.last_weight
    }

    /// Poll the link once and return a sample.
    ///
    /// Reads at most one line per call. When no data is pending, or the
    /// line does not parse, returns the previous weight as a carried-forward
    /// sample (`fresh: false`). Transport errors are absorbed here.
    pub fn sample(&mut self) -> WeightSample {
        let line = match self.link.try_read_line() {
            Ok(line) => line,
            Err(e) => {
                log::warn!("serial read failed: {e}");
                None
            }
        };

        let Some(line) = line else {
            return self.carried_forward();
        };
        log::debug!("raw line: {line:?}");

        match parse_weight_line(&line) {
            Some(weight) => {
                self.last_weight = weight;
                WeightSample {
                    weight,
                    fresh: true,
                }
            }
            None => {
                log::warn!("unparseable load-cell line: {line:?}");
                self.carried_forward()
            }
        }
    }

    fn carried_forward(&self) -> WeightSample {
        WeightSample {
            weight: self.last_weight,
            fresh: false,
        }
    }

    /// Close the underlying transport. Idempotent.
    pub fn close(&mut self) {
        self.link.close();
    }
}

/// Parse one line into a weight, preferring the labeled form.
fn parse_weight_line(line: &str) -> Option<f64> {
    if let Some((_, rest)) = line.split_once(LOAD_CELL_LABEL) {
        return rest.trim().parse().ok();
    }
    line.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::io;

    /// Scripted link: yields queued lines, then nothing.
    struct ScriptedLink {
        lines: VecDeque<Result<Option<String>, io::ErrorKind>>,
    }

    impl ScriptedLink {
        fn new(script: &[Result<Option<&str>, io::ErrorKind>]) -> Self {
            Self {
                lines: script
                    .iter()
                    .map(|r| match r {
                        Ok(s) => Ok(s.map(str::to_string)),
                        Err(k) => Err(*k),
                    })
                    .collect(),
            }
        }
    }

    impl SerialLink for ScriptedLink {
        fn try_read_line(&mut self) -> io::Result<Option<String>> {
            match self.lines.pop_front() {
                Some(Ok(line)) => Ok(line),
                Some(Err(kind)) => Err(io::Error::from(kind)),
                None => Ok(None),
            }
        }

        fn close(&mut self) {}
    }

    #[test]
    fn parses_labeled_line() {
        assert_eq!(
            parse_weight_line("Load_cell output val: 123.4"),
            Some(123.4)
        );
        assert_eq!(
            parse_weight_line("boot: Load_cell output val:  -7 "),
            Some(-7.0)
        );
    }

    #[test]
    fn parses_bare_number() {
        assert_eq!(parse_weight_line("42.5"), Some(42.5));
        assert_eq!(parse_weight_line("  -3 "), Some(-3.0));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_weight_line("hello"), None);
        assert_eq!(parse_weight_line("Load_cell output val: n/a"), None);
        assert_eq!(parse_weight_line(""), None);
    }

    #[test]
    fn fresh_sample_updates_last_weight() {
        let mut sampler = WeightSampler::new(ScriptedLink::new(&[Ok(Some("50.0"))]));
        let s = sampler.sample();
        assert_eq!(s, WeightSample { weight: 50.0, fresh: true });
        assert_eq!(sampler.last_weight(), 50.0);
    }

    #[test]
    fn no_data_carries_last_weight_forward() {
        let mut sampler = WeightSampler::new(ScriptedLink::new(&[Ok(Some("50.0")), Ok(None)]));
        sampler.sample();
        let s = sampler.sample();
        assert_eq!(s, WeightSample { weight: 50.0, fresh: false });
    }

    #[test]
    fn parse_failure_carries_last_weight_forward() {
        let mut sampler = WeightSampler::new(ScriptedLink::new(&[
            Ok(Some("50.0")),
            Ok(Some("<<corrupt>>")),
        ]));
        sampler.sample();
        let s = sampler.sample();
        assert_eq!(s, WeightSample { weight: 50.0, fresh: false });
        assert_eq!(sampler.last_weight(), 50.0);
    }

    #[test]
    fn transport_error_is_absorbed() {
        let mut sampler = WeightSampler::new(ScriptedLink::new(&[
            Ok(Some("50.0")),
            Err(io::ErrorKind::TimedOut),
        ]));
        sampler.sample();
        let s = sampler.sample();
        assert_eq!(s, WeightSample { weight: 50.0, fresh: false });
    }

    #[test]
    fn initial_carried_forward_weight_is_zero() {
        let mut sampler = WeightSampler::new(ScriptedLink::new(&[]));
        assert_eq!(sampler.sample(), WeightSample { weight: 0.0, fresh: false });
    }
}
