//! `harscope phases` – timing phase totals.

use anyhow::Result;
use harscope_core::{build_phase_stats, Capture, Phase, TimingSegments};

use crate::cli::output::Output;

pub fn run_phases(capture: &Capture, csv: bool, out: &Output) -> Result<()> {
    let stats = build_phase_stats(capture.entries());
    if csv {
        print!("{}", stats.to_csv()?);
        return Ok(());
    }
    if out.json {
        return out.print_json(&stats);
    }

    print!("{:<12}", "TYPE");
    for phase in Phase::ALL {
        print!(" {:>9}", phase.as_str());
    }
    println!(" {:>10}", "total");
    for (ty, segs) in stats.by_type.iter() {
        print_row(ty, segs);
    }
    print_row("(all)", &stats.total);
    Ok(())
}

fn print_row(label: &str, segs: &TimingSegments) {
    print!("{:<12}", label);
    for phase in Phase::ALL {
        print!(" {:>9.1}", segs.get(phase));
    }
    println!(" {:>10.1}", segs.sum());
}
