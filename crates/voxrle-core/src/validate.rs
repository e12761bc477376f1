// crates/voxrle-core/src/validate.rs

use crate::config::AnalysisConfig;
use crate::error::{Result, VoxError};

pub fn validate_config(cfg: &AnalysisConfig) -> Result<()> {
    if cfg.workers == 0 {
        return Err(VoxError::InvalidConfiguration(
            "worker count must be non-zero".into(),
        ));
    }
    Ok(())
}

/// Thresholds arrive wider than u8 from the command line.
pub fn validate_threshold(t: i64) -> Result<u8> {
    u8::try_from(t).map_err(|_| {
        VoxError::InvalidConfiguration(format!("threshold must be in 0..=255, got {t}"))
    })
}

/// Every worker count in a benchmark list must be usable.
pub fn validate_worker_counts(counts: &[usize]) -> Result<()> {
    if counts.is_empty() {
        return Err(VoxError::InvalidConfiguration(
            "worker count list is empty".into(),
        ));
    }
    if let Some(pos) = counts.iter().position(|&c| c == 0) {
        return Err(VoxError::InvalidConfiguration(format!(
            "worker count #{} is zero",
            pos + 1
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_workers() {
        let cfg = AnalysisConfig::default().with_workers(0);
        assert!(matches!(
            validate_config(&cfg),
            Err(VoxError::InvalidConfiguration(_))
        ));
        assert!(validate_config(&AnalysisConfig::default()).is_ok());
    }

    #[test]
    fn threshold_range() {
        assert_eq!(validate_threshold(25).unwrap(), 25);
        assert_eq!(validate_threshold(255).unwrap(), 255);
        assert!(validate_threshold(256).is_err());
        assert!(validate_threshold(-1).is_err());
    }

    #[test]
    fn worker_lists() {
        assert!(validate_worker_counts(&[1, 2, 4]).is_ok());
        assert!(validate_worker_counts(&[]).is_err());
        assert!(validate_worker_counts(&[1, 0]).is_err());
    }
}
