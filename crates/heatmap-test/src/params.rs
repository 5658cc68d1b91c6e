//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::{golden_dir, init_tracing, regout_dir};
use heatmap_core::{ColorDepth, ImageData};
use std::fs;
use std::path::{Path, PathBuf};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Generate golden files
    Generate,
    /// Compare with golden files (default)
    #[default]
    Compare,
    /// Display mode - run without comparison
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the running comparison index, the mode, and
/// whether every comparison so far has passed.
pub struct RegParams {
    /// Name of the test (e.g., "pseudocolor")
    pub test_name: String,
    /// Current test index (incremented before each test)
    index: usize,
    /// Test mode (generate, compare, or display)
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
    /// Where golden files are read and generated
    golden_dir: PathBuf,
    /// Where each run writes its output files
    regout_dir: PathBuf,
}

impl RegParams {
    /// Create regression test parameters with the mode taken from
    /// `REGTEST_MODE`.
    pub fn new(test_name: &str) -> Self {
        Self::with_mode(test_name, RegTestMode::from_env())
    }

    /// Create regression test parameters with an explicit mode.
    pub fn with_mode(test_name: &str, mode: RegTestMode) -> Self {
        init_tracing();
        tracing::info!(test = %test_name, ?mode, "starting regression test");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
            golden_dir: golden_dir(),
            regout_dir: regout_dir(),
        }
    }

    /// Use other golden and output directories than the workspace ones.
    pub fn with_dirs(mut self, golden: impl Into<PathBuf>, regout: impl Into<PathBuf>) -> Self {
        self.golden_dir = golden.into();
        self.regout_dir = regout.into();
        self
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn record_failure(&mut self, msg: String) {
        tracing::error!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `actual` is within `delta` of `expected`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Compare two byte arrays for exact equality
    ///
    /// On mismatch the first differing offset is reported.
    pub fn compare_bytes(&mut self, expected: &[u8], actual: &[u8]) -> bool {
        self.index += 1;

        if expected == actual {
            return true;
        }
        let first_diff = expected
            .iter()
            .zip(actual)
            .position(|(a, b)| a != b)
            .unwrap_or(expected.len().min(actual.len()));
        let msg = format!(
            "Failure in {}_reg: byte comparison for index {}\n\
             sizes: {} vs {}, first difference at offset {}",
            self.test_name,
            self.index,
            expected.len(),
            actual.len(),
            first_diff
        );
        self.record_failure(msg);
        false
    }

    /// Compare two images for exact equality
    ///
    /// Dimensions and color depth must match, then every pixel.
    pub fn compare_images(&mut self, expected: &ImageData, actual: &ImageData) -> bool {
        self.index += 1;

        if expected.width() != actual.width()
            || expected.height() != actual.height()
            || expected.depth() != actual.depth()
        {
            let msg = format!(
                "Failure in {}_reg: image comparison for index {} - dimension mismatch \
                 ({}x{}x{} vs {}x{}x{})",
                self.test_name,
                self.index,
                expected.width(),
                expected.height(),
                expected.depth().channels(),
                actual.width(),
                actual.height(),
                actual.depth().channels()
            );
            self.record_failure(msg);
            return false;
        }

        let width = expected.width() as usize;
        if let Some(i) = expected
            .pixels()
            .zip(actual.pixels())
            .position(|(p1, p2)| p1 != p2)
        {
            let msg = format!(
                "Failure in {}_reg: image comparison for index {} - pixel mismatch at ({}, {})",
                self.test_name,
                self.index,
                i % width,
                i / width
            );
            self.record_failure(msg);
            return false;
        }

        true
    }

    /// Write an image's raw buffer and check it against its golden file
    ///
    /// The extension records the color depth (`gray`, `ga`, `rgb`, `rgba`).
    pub fn write_image_and_check(&mut self, image: &ImageData) -> TestResult<()> {
        let ext = match image.depth() {
            ColorDepth::Gray => "gray",
            ColorDepth::GrayAlpha => "ga",
            ColorDepth::Rgb => "rgb",
            ColorDepth::Rgba => "rgba",
        };
        self.write_data_and_check(image.data(), ext)
    }

    /// Write data to file and check against golden file
    pub fn write_data_and_check(&mut self, data: &[u8], ext: &str) -> TestResult<()> {
        self.index += 1;
        ensure_dir(&self.regout_dir)?;

        let local_path = self
            .regout_dir
            .join(format!("{}.{:02}.{}", self.test_name, self.index, ext));

        fs::write(&local_path, data)?;
        self.check_file(&local_path, ext)
    }

    /// Check a file against its golden counterpart
    ///
    /// In generate mode, copies the file to golden.
    /// In compare mode, compares with golden file.
    /// In display mode, does nothing.
    fn check_file(&mut self, local_path: &Path, ext: &str) -> TestResult<()> {
        let golden_path = self
            .golden_dir
            .join(format!("{}_golden.{:02}.{}", self.test_name, self.index, ext));

        match self.mode {
            RegTestMode::Generate => {
                ensure_dir(&self.golden_dir)?;
                fs::copy(local_path, &golden_path)?;
                tracing::info!(path = %golden_path.display(), "generated golden file");
            }
            RegTestMode::Compare => {
                if !golden_path.exists() {
                    let msg = format!(
                        "Failure in {}_reg: golden file not found: {}",
                        self.test_name,
                        golden_path.display()
                    );
                    self.record_failure(msg);
                    return Ok(());
                }

                let local_data = fs::read(local_path)?;
                let golden_data = fs::read(&golden_path)?;

                if local_data != golden_data {
                    let msg = format!(
                        "Failure in {}_reg, index {}: comparing {} with {}",
                        self.test_name,
                        self.index,
                        local_path.display(),
                        golden_path.display()
                    );
                    self.record_failure(msg);
                }
            }
            RegTestMode::Display => {
                // Nothing to do in display mode
            }
        }

        Ok(())
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all comparisons passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            tracing::info!("SUCCESS: {}_reg", self.test_name);
        } else {
            tracing::error!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                tracing::error!("  {}", failure);
            }
        }

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

fn ensure_dir(path: &Path) -> TestResult<()> {
    fs::create_dir_all(path).map_err(|e| TestError::DirectoryCreate {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_mode_from_env() {
        // Can't safely change the env var here; only check we get a valid mode
        let mode = RegTestMode::from_env();
        assert!(matches!(
            mode,
            RegTestMode::Compare | RegTestMode::Generate | RegTestMode::Display
        ));
    }

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::with_mode("params_values", RegTestMode::Display);
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert_eq!(rp.index(), 2);
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::with_mode("params_values_fail", RegTestMode::Display);
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_bytes() {
        let mut rp = RegParams::with_mode("params_bytes", RegTestMode::Display);
        assert!(rp.compare_bytes(&[1, 2, 3], &[1, 2, 3]));
        assert!(!rp.compare_bytes(&[1, 2, 3], &[1, 9, 3]));
        assert!(rp.failures()[0].contains("offset 1"));
    }

    #[test]
    fn test_compare_images() {
        let mut rp = RegParams::with_mode("params_images", RegTestMode::Display);
        let a = ImageData::from_rgba(vec![0; 16], 2, 2).unwrap();
        let mut raw = vec![0; 16];
        raw[12] = 1;
        let b = ImageData::from_rgba(raw, 2, 2).unwrap();
        let gray = ImageData::from_gray(vec![0; 4], 2, 2).unwrap();

        assert!(rp.compare_images(&a, &a));
        assert!(!rp.compare_images(&a, &b));
        assert!(rp.failures()[0].contains("(1, 1)"));
        assert!(!rp.compare_images(&a, &gray));
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_generate_then_compare() {
        let tmp = TempDir::new().unwrap();
        let (golden, regout) = (tmp.path().join("golden"), tmp.path().join("regout"));
        let image = ImageData::from_gray(vec![7, 8, 9], 3, 1).unwrap();

        let mut rp = RegParams::with_mode("params_golden", RegTestMode::Generate)
            .with_dirs(&golden, &regout);
        rp.write_image_and_check(&image).unwrap();
        assert!(rp.cleanup());
        assert_eq!(
            fs::read(golden.join("params_golden_golden.01.gray")).unwrap(),
            vec![7, 8, 9]
        );

        let mut rp = RegParams::with_mode("params_golden", RegTestMode::Compare)
            .with_dirs(&golden, &regout);
        rp.write_image_and_check(&image).unwrap();
        assert!(rp.cleanup());

        let changed = ImageData::from_gray(vec![7, 8, 10], 3, 1).unwrap();
        let mut rp = RegParams::with_mode("params_golden", RegTestMode::Compare)
            .with_dirs(&golden, &regout);
        rp.write_image_and_check(&changed).unwrap();
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_missing_golden_fails() {
        let tmp = TempDir::new().unwrap();
        let mut rp = RegParams::with_mode("params_no_golden", RegTestMode::Compare)
            .with_dirs(tmp.path().join("golden"), tmp.path().join("regout"));
        rp.write_data_and_check(&[1, 2, 3], "bin").unwrap();
        assert!(!rp.is_success());
        assert!(rp.failures()[0].contains("golden file not found"));
    }
}
