//! `pi` — prints π to the requested number of digits.

use clap::Parser;
use mp_cli::{init_precision, spinner, CommonArgs};
use mp_core::kernels::constants;

fn main() -> anyhow::Result<()> {
    let args = CommonArgs::parse();
    init_precision(&args)?;

    let bar = spinner("computing pi via Brent-Salamin AGM");
    let value = constants::pi();
    bar.finish_and_clear();

    println!("{}", value.write_string(args.digits10));
    Ok(())
}
