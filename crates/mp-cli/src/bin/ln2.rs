//! `ln2` — prints ln 2 to the requested number of digits.

use clap::Parser;
use mp_cli::{init_precision, spinner, CommonArgs};
use mp_core::kernels::constants;

fn main() -> anyhow::Result<()> {
    let args = CommonArgs::parse();
    init_precision(&args)?;

    let bar = spinner("computing ln 2 via the AGM bootstrap");
    let value = constants::ln2();
    bar.finish_and_clear();

    println!("{}", value.write_string(args.digits10));
    Ok(())
}
