// crates/voxrle-cli/src/cmd/stats.rs

use std::io::Cursor;

use clap::Args;
use voxrle_core::exec::sequential::estimate_from_bitmap;
use voxrle_core::symbol::bitmap::SymbolBitmap;
use voxrle_core::wire::checksum::dataset_id;

use crate::cmd::common::VolumeArgs;
use crate::report;

#[derive(Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub volume: VolumeArgs,

    /// Skip the zstd size of the packed bitmap
    #[arg(long, default_value_t = false)]
    pub no_zstd: bool,

    /// Zstd compression level (1..=22 typical). Higher is slower.
    #[arg(long, default_value_t = 3)]
    pub zstd_level: i32,
}

pub fn run(args: StatsArgs) -> anyhow::Result<()> {
    let cfg = args.volume.config()?;
    let data = args.volume.load()?;

    let mut h = [0u64; 256];
    for &b in &data {
        h[b as usize] += 1;
    }
    let distinct = h.iter().filter(|&&c| c > 0).count();

    report::print_volume_header(&args.volume.r#in, &args.volume.dims, cfg.threshold, &dataset_id(&data));
    println!("distinct_values = {}/256", distinct);
    println!("sample_entropy  = {:.6} (max 8.000000)", entropy_bits(&h, data.len() as u64));

    let bitmap = SymbolBitmap::from_samples(&data, cfg.threshold)?;
    drop(data);

    let est = estimate_from_bitmap(&bitmap, cfg.variants)?;
    report::print_statistics(&est, cfg.threshold);

    let split = [est.passive_voxels(), est.active_voxels];
    println!("symbol_entropy  = {:.6} bits/voxel", entropy_bits(&split, est.voxel_count));

    if let Some((n, bits)) = est.best_variant() {
        println!("--- rle ---");
        println!("best_width      = N={n} ({} b/packet)", n + 1);
        println!("best_bytes      = {}", bits.div_ceil(8));
    }

    if !args.no_zstd {
        let z = zstd_size(bitmap.as_bytes(), args.zstd_level)?;
        let ratio = if z == 0 {
            0.0
        } else {
            bitmap.as_bytes().len() as f64 / z as f64
        };
        println!("--- zstd (packed bitmap) ---");
        println!("zstd_level      = {}", args.zstd_level);
        println!("zstd_bytes      = {}", z);
        println!("ratio_bitmap/zstd = {:.4}x", ratio);
    }

    Ok(())
}

fn zstd_size(bytes: &[u8], level: i32) -> anyhow::Result<usize> {
    let out = zstd::stream::encode_all(Cursor::new(bytes), level)?;
    Ok(out.len())
}

fn entropy_bits(counts: &[u64], total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let mut ent = 0.0;
    for &c in counts {
        if c == 0 {
            continue;
        }
        let p = (c as f64) / (total as f64);
        ent -= p * p.log2();
    }
    ent
}
