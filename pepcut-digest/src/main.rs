//! pepcut demo: digest two peptides and validate a fragment list.
//!
//! Takes no arguments. Output is a human-readable list per line, not a
//! machine-readable format.

use std::io::{self, Write};

use pepcut_core::Summarizable;
use pepcut_digest::{chymotrypsin_cleave, trypsin_cleave, Protease};

fn main() -> pepcut_core::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(tracing::Level::WARN)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{:?}", trypsin_cleave("KMKAFLRGYV"))?;
    writeln!(out, "{:?}", chymotrypsin_cleave("AFYMWLGA"))?;

    match Protease::trypsin().validate(&["AK", "R", "MK", "YP"]) {
        Ok(report) => writeln!(out, "valid: {:?} ({})", report.fragments(), report.summary())?,
        Err(err) => writeln!(out, "invalid [{}]: {err}", err.kind())?,
    }

    out.flush()?;
    Ok(())
}
