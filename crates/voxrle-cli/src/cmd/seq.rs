// crates/voxrle-cli/src/cmd/seq.rs

use clap::Args;
use voxrle_core::exec::analyze;
use voxrle_core::wire::checksum::dataset_id;
use voxrle_core::ExecMode;

use crate::cmd::common::VolumeArgs;
use crate::report;

#[derive(Args, Debug)]
pub struct SeqArgs {
    #[command(flatten)]
    pub volume: VolumeArgs,

    /// sequential (dense bitmap, one scan per width) or streaming (one pass)
    #[arg(long, default_value = "sequential")]
    pub mode: ExecMode,
}

pub fn run(args: SeqArgs) -> anyhow::Result<()> {
    if !matches!(args.mode, ExecMode::Sequential | ExecMode::Streaming) {
        anyhow::bail!("seq runs sequential or streaming, got {}", args.mode);
    }
    let cfg = args.volume.config()?;
    let data = args.volume.load()?;

    report::print_volume_header(&args.volume.r#in, &args.volume.dims, cfg.threshold, &dataset_id(&data));

    let a = analyze(&data, data.len(), &cfg, args.mode)?;
    report::print_table(&a);
    report::print_statistics(&a.estimate, cfg.threshold);
    Ok(())
}
