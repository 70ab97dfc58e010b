use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{error::Result, quantizer::Palette, serde_utils::JSONReadWrite};

/// Per-input reports keyed by file stem
pub const REPORTS_FILE: &str = "reports.json";
/// Run-level `OverallSummary`
pub const SUMMARY_FILE: &str = "summary.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantizeReport {
    pub input: String,
    pub width: u32,
    pub height: u32,
    pub sample_factor: usize,
    pub visits: usize,
    pub cycles: usize,
    /// Distinct colors among the 256 entries
    pub distinct_colors: usize,
    pub duration_ms: u128,
}

impl QuantizeReport {
    pub fn new(input: &str, dims: (u32, u32), sample_factor: usize, palette: &Palette, duration_ms: u128) -> Self {
        Self {
            input: input.to_owned(),
            width: dims.0,
            height: dims.1,
            sample_factor,
            visits: palette.stats.visits,
            cycles: palette.stats.cycles,
            distinct_colors: palette.distinct(),
            duration_ms,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OverallSummary {
    pub n_inputs: usize,
    pub n_failed: usize,
    pub elapsed_ms: u128,
    pub sample_factor: usize,
}

/// Writes the per-input reports and the run summary into `out_dir`.
pub fn write_run<P: AsRef<Path>>(
    out_dir: P,
    reports: &IndexMap<String, QuantizeReport>,
    summary: &OverallSummary,
) -> Result<()> {
    let out_dir = out_dir.as_ref();
    reports.write_json(out_dir.join(REPORTS_FILE))?;
    summary.write_json(out_dir.join(SUMMARY_FILE))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_write_run() {
        let out_dir = std::env::temp_dir().join(format!("neuquant_metrics_{}", std::process::id()));
        fs::create_dir_all(&out_dir).unwrap();

        let report = QuantizeReport {
            input: "in/cat.png".to_owned(),
            width: 40,
            height: 30,
            sample_factor: 1,
            visits: 1200,
            cycles: 100,
            distinct_colors: 200,
            duration_ms: 3,
        };
        let mut reports = IndexMap::new();
        reports.insert("cat".to_owned(), report);
        let summary = OverallSummary {
            n_inputs: 2,
            n_failed: 1,
            elapsed_ms: 5,
            sample_factor: 1,
        };

        write_run(&out_dir, &reports, &summary).unwrap();

        let read_reports = IndexMap::<String, QuantizeReport>::read_json(out_dir.join(REPORTS_FILE)).unwrap();
        assert_eq!(read_reports.len(), 1);
        assert_eq!(read_reports["cat"].visits, 1200);

        let read_summary = OverallSummary::read_json(out_dir.join(SUMMARY_FILE)).unwrap();
        assert_eq!(read_summary.n_inputs, 2);
        assert_eq!(read_summary.n_failed, 1);

        fs::remove_dir_all(&out_dir).unwrap();
    }
}
