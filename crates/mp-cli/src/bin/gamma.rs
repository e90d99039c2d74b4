//! `gamma` — prints `gamma(x)` to the requested number of digits.

use clap::Parser;
use mp_cli::{init_precision, spinner, CommonArgs};
use mp_core::kernels::gamma::gamma;
use mp_core::real::Real;

#[derive(Parser, Debug)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Argument `x`.
    #[arg(short = 'x', long)]
    x: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_precision(&args.common)?;

    let x = Real::parse(&args.x).map_err(|e| anyhow::anyhow!("{e}"))?;
    let bar = spinner("evaluating gamma via the Stirling series");
    let value = gamma(&x);
    bar.finish_and_clear();

    println!("{}", value.write_string(args.common.digits10));
    Ok(())
}
