//! `bessel` — prints `J_n(x)` to the requested number of digits.

use clap::Parser;
use mp_cli::{init_precision, spinner, CommonArgs};
use mp_core::kernels::bessel::cyl_bessel_j;
use mp_core::real::Real;

#[derive(Parser, Debug)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Bessel order.
    #[arg(short = 'n', long, default_value_t = 0)]
    order: u32,

    /// Argument `x`.
    #[arg(short = 'x', long)]
    x: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_precision(&args.common)?;

    let x = Real::parse(&args.x).map_err(|e| anyhow::anyhow!("{e}"))?;
    let bar = spinner("evaluating the Bessel series");
    let value = cyl_bessel_j(args.order, &x);
    bar.finish_and_clear();

    println!("{}", value.write_string(args.common.digits10));
    Ok(())
}
