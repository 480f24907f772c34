//! Regression test parameters and operations

use crate::init_logging;
use glyphscan_core::Pix;

/// Regression test parameters
///
/// Collects the outcome of every check of one regression test. Checks never
/// panic; the test asserts on [`RegParams::cleanup`] at the end so that all
/// failures are reported together, each tagged with its check index.
pub struct RegParams {
    /// Name of the test (e.g., "reconstruct")
    pub test_name: String,
    index: usize,
    failures: Vec<String>,
}

impl RegParams {
    /// Start a regression test, installing the log subscriber on first use.
    pub fn new(test_name: &str) -> Self {
        init_logging();
        eprintln!("--- {}_reg ---", test_name);
        Self {
            test_name: test_name.to_string(),
            index: 0,
            failures: Vec::new(),
        }
    }

    /// Number of checks run so far
    pub fn index(&self) -> usize {
        self.index
    }

    /// Record the outcome of the next check; `describe` is only called on
    /// failure.
    fn check(&mut self, ok: bool, describe: impl FnOnce() -> String) -> bool {
        self.index += 1;
        if !ok {
            let msg = format!("{}_reg #{}: {}", self.test_name, self.index, describe());
            eprintln!("{}", msg);
            self.failures.push(msg);
        }
        ok
    }

    /// Check that `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        let diff = (expected - actual).abs();
        self.check(diff <= delta, || {
            format!(
                "expected {}, got {} (difference {} > {})",
                expected, actual, diff, delta
            )
        })
    }

    /// Check that two images have the same size, depth and pixels.
    pub fn compare_pix(&mut self, expected: &Pix, actual: &Pix) -> bool {
        let shape = |p: &Pix| (p.width(), p.height(), p.depth());
        if shape(expected) != shape(actual) {
            return self.check(false, || {
                format!("expected {:?}, got {:?}", shape(expected), shape(actual))
            });
        }
        let mismatches: Vec<(u32, u32)> = (0..expected.height())
            .flat_map(|y| (0..expected.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| expected.get_pixel(x, y) != actual.get_pixel(x, y))
            .collect();
        self.check(mismatches.is_empty(), || {
            format!(
                "{} pixels differ, first at {:?}",
                mismatches.len(),
                mismatches[0]
            )
        })
    }

    /// Check two strings for equality; both are echoed on failure so
    /// recognized text can be read straight from the test log.
    pub fn compare_strings(&mut self, expected: &str, actual: &str) -> bool {
        self.check(expected == actual, || {
            format!("expected {:?}, got {:?}", expected, actual)
        })
    }

    /// Report the results; `true` if every check passed.
    pub fn cleanup(self) -> bool {
        if self.failures.is_empty() {
            eprintln!("SUCCESS: {}_reg ({} checks)", self.test_name, self.index);
            return true;
        }
        eprintln!(
            "FAILURE: {}_reg ({} of {} checks)",
            self.test_name,
            self.failures.len(),
            self.index
        );
        for failure in &self.failures {
            eprintln!("  {}", failure);
        }
        false
    }

    /// Failures recorded so far
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphscan_core::{PixMut, PixelDepth};

    #[test]
    fn test_compare_values() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.failures().is_empty());
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert_eq!(rp.index(), 3);
        assert_eq!(rp.failures().len(), 1);
        assert!(rp.failures()[0].starts_with("test_reg #3:"));
    }

    #[test]
    fn test_compare_strings() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_strings("AB\nC", "AB\nC"));
        assert!(!rp.compare_strings("AB", "BA"));
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_pix_reports_mismatch() {
        let blank = Pix::new(4, 3, PixelDepth::Bit1).unwrap();
        let mut pm = PixMut::new(4, 3, PixelDepth::Bit1).unwrap();
        pm.set_pixel(2, 1, 1).unwrap();
        let dot: Pix = pm.into();
        let gray = Pix::new(4, 3, PixelDepth::Bit8).unwrap();

        let mut rp = RegParams::new("test");
        assert!(rp.compare_pix(&blank, &blank.clone()));
        assert!(!rp.compare_pix(&blank, &dot));
        assert!(rp.failures()[0].contains("(2, 1)"));
        assert!(!rp.compare_pix(&blank, &gray));
        assert_eq!(rp.failures().len(), 2);
    }
}
