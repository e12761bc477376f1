// crates/voxrle-core/src/config.rs

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, VoxError};
use crate::partition::split::PartitionPolicy;
use crate::rle::variant::VariantRange;

/// Grid dimensions of the raw volume, stored row-major (x fastest).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VolumeDims {
    pub x: u64,
    pub y: u64,
    pub z: u64,
}

impl VolumeDims {
    pub const DEFAULT: VolumeDims = VolumeDims {
        x: 1024,
        y: 1024,
        z: 314,
    };

    pub fn new(x: u64, y: u64, z: u64) -> Result<Self> {
        let d = Self { x, y, z };
        d.voxel_count()?;
        Ok(d)
    }

    /// `x * y * z`, checked against both u64 and the address space.
    pub fn voxel_count(&self) -> Result<usize> {
        if self.x == 0 || self.y == 0 || self.z == 0 {
            return Err(VoxError::InvalidConfiguration(format!(
                "dimensions must be non-zero, got {self}"
            )));
        }
        self.x
            .checked_mul(self.y)
            .and_then(|v| v.checked_mul(self.z))
            .and_then(|v| usize::try_from(v).ok())
            .ok_or_else(|| {
                VoxError::InvalidConfiguration(format!("voxel count overflows for {self}"))
            })
    }

    /// Dimensions for a flat stream of `len` voxels.
    pub fn linear(len: u64) -> Result<Self> {
        Self::new(len, 1, 1)
    }
}

impl Default for VolumeDims {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for VolumeDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.x, self.y, self.z)
    }
}

impl FromStr for VolumeDims {
    type Err = VoxError;

    /// Accepts `XxYxZ` (e.g. `1024x1024x314`) or a single voxel count.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split(['x', 'X', '*']).map(str::trim).collect();
        let nums = parts
            .iter()
            .map(|p| p.parse::<u64>())
            .collect::<std::result::Result<Vec<u64>, _>>()
            .map_err(|e| VoxError::InvalidConfiguration(format!("bad dimensions {s:?}: {e}")))?;
        match nums.as_slice() {
            [n] => Self::linear(*n),
            [x, y, z] => Self::new(*x, *y, *z),
            _ => Err(VoxError::InvalidConfiguration(format!(
                "dimensions must be XxYxZ or a voxel count, got {s:?}"
            ))),
        }
    }
}

/// Knobs for one analysis run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// A voxel is active iff its sample is strictly above this.
    pub threshold: u8,
    pub variants: VariantRange,
    /// Partition / worker count.
    pub workers: usize,
    pub policy: PartitionPolicy,
}

impl AnalysisConfig {
    pub const DEFAULT_THRESHOLD: u8 = 25;

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_policy(mut self, policy: PartitionPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
            variants: VariantRange::DEFAULT,
            workers: 1,
            policy: PartitionPolicy::LastAbsorbs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dims() {
        let d: VolumeDims = "1024x1024x314".parse().unwrap();
        assert_eq!(d, VolumeDims::DEFAULT);
        assert_eq!(d.voxel_count().unwrap(), 1024 * 1024 * 314);

        let flat: VolumeDims = "4096".parse().unwrap();
        assert_eq!(flat.voxel_count().unwrap(), 4096);

        assert!("10x0x3".parse::<VolumeDims>().is_err());
        assert!("10x3".parse::<VolumeDims>().is_err());
        assert!("axbxc".parse::<VolumeDims>().is_err());
    }
}
