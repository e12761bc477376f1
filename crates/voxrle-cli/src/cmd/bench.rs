// crates/voxrle-cli/src/cmd/bench.rs

use clap::Args;
use voxrle_core::exec::analyze;
use voxrle_core::wire::checksum::dataset_id;
use voxrle_core::{ExecMode, PartitionPolicy, RleEstimate};

use crate::cmd::common::{parse_workers, VolumeArgs};
use crate::io::raw;
use crate::report;

#[derive(Args, Debug)]
pub struct BenchArgs {
    #[command(flatten)]
    pub volume: VolumeArgs,

    /// Comma-separated worker counts (e.g. 1,2,4,8,16)
    #[arg(long, default_value = "1,2,4,8,16")]
    pub workers: String,

    /// Partition policy: last (last absorbs remainder) or balanced
    #[arg(long, default_value = "last")]
    pub policy: PartitionPolicy,

    /// Skip touching every page of the volume before timing
    #[arg(long, default_value_t = false)]
    pub no_warmup: bool,

    /// Emit CSV rows instead of report blocks
    #[arg(long, default_value_t = false)]
    pub csv: bool,
}

pub fn run(args: BenchArgs, mode: ExecMode) -> anyhow::Result<()> {
    let counts = parse_workers(&args.workers)?;
    let base = args.volume.config()?.with_policy(args.policy);

    let data = args.volume.load()?;
    if !args.no_warmup {
        raw::touch_pages(&data);
    }

    if args.csv {
        report::print_csv_header();
    } else {
        report::print_volume_header(&args.volume.r#in, &args.volume.dims, base.threshold, &dataset_id(&data));
    }

    let expected = data.len();
    let mut reference: Option<RleEstimate> = None;
    for workers in counts {
        let cfg = base.with_workers(workers);
        let a = analyze(&data, expected, &cfg, mode)?;

        if let Some(r) = &reference {
            if *r != a.estimate {
                anyhow::bail!("{mode} result with {workers} workers differs from the first run");
            }
        }

        if args.csv {
            report::print_csv_rows(&a);
        } else {
            report::print_analysis(&a);
        }
        reference.get_or_insert(a.estimate);
    }

    Ok(())
}
