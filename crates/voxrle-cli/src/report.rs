// crates/voxrle-cli/src/report.rs
//
// Report rendering. Reports go to stdout; logs go to stderr.

use voxrle_core::exec::Analysis;
use voxrle_core::{ExecMode, RleEstimate, VolumeDims};

pub fn print_volume_header(path: &str, dims: &VolumeDims, threshold: u8, id: &str) {
    let voxels = dims.voxel_count().unwrap_or(0);
    println!("volume          = {path}");
    println!("dimensions      = {dims}");
    println!("total_voxels    = {voxels}");
    println!("threshold       = {threshold}");
    println!("dataset_id      = {id}");
}

/// Per-run block: one line per width plus the analysis time.
pub fn print_analysis(a: &Analysis) {
    let unit = match a.mode {
        ExecMode::Distributed => "ranks",
        _ => "threads",
    };
    println!();
    println!("=== {} with {} {} ===", a.mode, a.workers, unit);
    println!("--- final RLE analysis ---");
    for r in a.estimate.rows() {
        println!(
            "N={:2} ({:2} b/packet): {:>14} bits ({:.2} MB)",
            r.n, r.packet_bits, r.bits, r.megabytes
        );
    }
    println!(">> computation time: {:.6} seconds", a.elapsed.as_secs_f64());
}

/// Wide table with byte sizes and compression ratio.
pub fn print_table(a: &Analysis) {
    println!();
    println!("--- {} ---", a.mode);
    println!(
        "{:>11} | {:>11} | {:>18} | {:>16} | {:>10}",
        "count bits", "packet bits", "size (bits)", "size (bytes)", "ratio"
    );
    println!("{}", "-".repeat(78));
    for r in a.estimate.rows() {
        println!(
            "{:>11} | {:>11} | {:>18} | {:>16} | {:>10.4}",
            r.n, r.packet_bits, r.bits, r.bytes, r.ratio
        );
    }
    if let Some((n, bits)) = a.estimate.best_variant() {
        println!("best            = N={n} ({bits} bits)");
    }
    println!(">> computation time: {:.6} seconds", a.elapsed.as_secs_f64());
}

pub fn print_statistics(e: &RleEstimate, threshold: u8) {
    println!();
    println!("--- statistics ---");
    println!(
        "active (> {threshold})    = {} ({:.2}%)",
        e.active_voxels,
        e.active_percent()
    );
    println!(
        "passive (<= {threshold})  = {} ({:.2}%)",
        e.passive_voxels(),
        e.passive_percent()
    );
    println!("runs            = {}", e.run_count);
    println!(
        "bitmap_size     = {} bits ({} bytes)",
        e.voxel_count,
        e.bitmap_bytes()
    );
}

pub fn print_csv_header() {
    println!("mode,workers,n,packet_bits,bits,bytes,mb,ratio,elapsed_s");
}

pub fn print_csv_rows(a: &Analysis) {
    for r in a.estimate.rows() {
        println!(
            "{},{},{},{},{},{},{:.6},{:.6},{:.6}",
            a.mode,
            a.workers,
            r.n,
            r.packet_bits,
            r.bits,
            r.bytes,
            r.megabytes,
            r.ratio,
            a.elapsed.as_secs_f64()
        );
    }
}
