//! `mptest` — self-test driver (spec §8 "testable properties"):
//! recomputes a handful of known identities at the configured precision
//! and reports pass/fail, exiting non-zero on the first failure.

use clap::Parser;
use mp_cli::{init_precision, CommonArgs};
use mp_core::detail::is_negligible;
use mp_core::kernels::{bessel::cyl_bessel_j, constants, exp::exp, gamma::gamma, log::log, sqrt::sqrt, trig};
use mp_core::real::Real;

struct Check {
    name: &'static str,
    ok: bool,
}

fn run_checks() -> Vec<Check> {
    let mut checks = Vec::new();

    let pi = constants::pi();
    checks.push(Check {
        name: "pi is between 3 and 4",
        ok: pi.compare(&Real::from_u64(3)) == std::cmp::Ordering::Greater
            && pi.compare(&Real::from_u64(4)) == std::cmp::Ordering::Less,
    });

    let pi_cubic = constants::pi_borwein_cubic();
    checks.push(Check {
        name: "pi agreement: Brent-Salamin vs Borwein cubic",
        ok: is_negligible(&pi.sub(&pi_cubic)),
    });

    let pi_quartic = constants::pi_borwein_quartic();
    checks.push(Check {
        name: "pi agreement: Brent-Salamin vs Borwein quartic",
        ok: is_negligible(&pi.sub(&pi_quartic)),
    });

    let ln2 = constants::ln2();
    checks.push(Check {
        name: "exp(ln2) == 2",
        ok: is_negligible(&exp(&ln2).sub(&Real::from_u64(2))),
    });

    let x = Real::from_u64(3);
    checks.push(Check {
        name: "log(exp(x)) == x",
        ok: is_negligible(&log(&exp(&x)).sub(&x)),
    });

    let (s, c) = trig::sin_cos(&Real::from_u64(1));
    checks.push(Check {
        name: "sin^2(1) + cos^2(1) == 1",
        ok: is_negligible(&s.mul(&s).add(&c.mul(&c)).sub(&Real::from_u64(1))),
    });

    let sqrt2 = sqrt(&Real::from_u64(2));
    checks.push(Check {
        name: "sqrt(2)^2 == 2",
        ok: is_negligible(&sqrt2.mul(&sqrt2).sub(&Real::from_u64(2))),
    });

    let g = gamma(&Real::from_u64(6));
    checks.push(Check {
        name: "gamma(6) == 120",
        ok: is_negligible(&g.sub(&Real::from_u64(120)).div(&Real::from_u64(120))),
    });

    let j0 = cyl_bessel_j(0, &Real::zero());
    checks.push(Check {
        name: "J_0(0) == 1",
        ok: is_negligible(&j0.sub(&Real::from_u64(1))),
    });

    checks
}

fn main() -> anyhow::Result<()> {
    let args = CommonArgs::parse();
    init_precision(&args)?;

    let checks = run_checks();
    let mut failed = 0;
    for check in &checks {
        println!("[{}] {}", if check.ok { "ok" } else { "FAIL" }, check.name);
        if !check.ok {
            failed += 1;
        }
    }

    println!("{}/{} checks passed", checks.len() - failed, checks.len());
    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
