// crates/voxrle-cli/src/cmd/synth.rs

use clap::{Args, ValueEnum};
use voxrle_core::VolumeDims;

use crate::io::raw;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Pattern {
    /// Alternating runs with random lengths in 1..=2*mean_run
    Runs,
    /// Active and passive every other voxel
    Alternating,
    /// Every voxel active
    Solid,
    /// Independent random samples
    Noise,
}

#[derive(Args, Debug)]
pub struct SynthArgs {
    /// Output raw volume path
    #[arg(long)]
    pub out: String,

    /// Grid dimensions XxYxZ, or a plain voxel count
    #[arg(long, default_value = "64x64x16")]
    pub dims: VolumeDims,

    #[arg(long, value_enum, default_value_t = Pattern::Runs)]
    pub pattern: Pattern,

    /// Mean run length for the runs pattern
    #[arg(long, default_value_t = 200)]
    pub mean_run: u64,

    /// Generator seed (deterministic, not crypto)
    #[arg(long, default_value_t = 0xC8C8_0314)]
    pub seed: u64,
}

pub fn run(args: SynthArgs) -> anyhow::Result<()> {
    let len = args.dims.voxel_count()?;
    if args.mean_run == 0 {
        anyhow::bail!("mean-run must be non-zero");
    }
    let data = generate(args.pattern, len, args.mean_run, args.seed);
    raw::write_volume(&args.out, &data)?;
    eprintln!(
        "synth ok: out={} dims={} voxels={} pattern={:?}",
        args.out, args.dims, len, args.pattern
    );
    Ok(())
}

fn sample(active: bool, s: &mut u64) -> u8 {
    let r = (lcg_next(s) >> 56) as u8;
    if active {
        26 + r % 230
    } else {
        r % 26
    }
}

fn lcg_next(x: &mut u64) -> u64 {
    *x = x.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    *x
}

/// Samples: active voxels are 26..=255, passive 0..=25 (threshold 25).
pub fn generate(pattern: Pattern, len: usize, mean_run: u64, seed: u64) -> Vec<u8> {
    let mut s = seed;
    let mut out = Vec::with_capacity(len);
    match pattern {
        Pattern::Solid => out.resize(len, 255),
        Pattern::Alternating => {
            for i in 0..len {
                out.push(if i % 2 == 0 { 0 } else { 255 });
            }
        }
        Pattern::Noise => {
            for _ in 0..len {
                out.push((lcg_next(&mut s) >> 56) as u8);
            }
        }
        Pattern::Runs => {
            let mut active = false;
            while out.len() < len {
                let run = 1 + lcg_next(&mut s) % (2 * mean_run);
                let take = (run as usize).min(len - out.len());
                for _ in 0..take {
                    let v = sample(active, &mut s);
                    out.push(v);
                }
                active = !active;
            }
        }
    }
    out
}
