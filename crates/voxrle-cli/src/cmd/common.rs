// crates/voxrle-cli/src/cmd/common.rs

use clap::Args;
use voxrle_core::validate::validate_threshold;
use voxrle_core::{AnalysisConfig, VariantRange, VolumeDims};

use crate::io::raw;

/// Where the volume comes from and how it is classified.
#[derive(Args, Debug, Clone)]
pub struct VolumeArgs {
    /// Raw 8-bit volume, row-major (x fastest)
    #[arg(long = "in", default_value = "c8.raw")]
    pub r#in: String,

    /// Grid dimensions XxYxZ, or a plain voxel count
    #[arg(long, default_value = "1024x1024x314")]
    pub dims: VolumeDims,

    /// Voxels strictly above this are active (0..=255)
    #[arg(long, default_value_t = 25, allow_negative_numbers = true)]
    pub threshold: i64,

    /// Smallest packet count width to evaluate
    #[arg(long, default_value_t = 2)]
    pub n_min: u32,

    /// Largest packet count width to evaluate
    #[arg(long, default_value_t = 17)]
    pub n_max: u32,
}

impl VolumeArgs {
    pub fn config(&self) -> anyhow::Result<AnalysisConfig> {
        Ok(AnalysisConfig {
            threshold: validate_threshold(self.threshold)?,
            variants: VariantRange::new(self.n_min, self.n_max)?,
            ..AnalysisConfig::default()
        })
    }

    pub fn voxel_count(&self) -> anyhow::Result<usize> {
        Ok(self.dims.voxel_count()?)
    }

    pub fn load(&self) -> anyhow::Result<Vec<u8>> {
        let expected = self.voxel_count()?;
        tracing::info!(path = %self.r#in, dims = %self.dims, voxels = expected, "loading volume");
        raw::load_volume(&self.r#in, expected)
    }
}

pub fn parse_workers(s: &str) -> anyhow::Result<Vec<usize>> {
    let mut out = Vec::new();
    for part in s.split(',') {
        let t = part.trim();
        if t.is_empty() {
            continue;
        }
        out.push(t.parse::<usize>()?);
    }
    voxrle_core::validate::validate_worker_counts(&out)?;
    Ok(out)
}
