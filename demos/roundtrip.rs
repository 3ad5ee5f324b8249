//! Manual accuracy check for the NZTM2000 projection: reads easting/northing
//! pairs, and reports the result of an inverse-then-forward roundtrip.
//!
//! ```sh
//! echo 1576041.150 6188574.240 | cargo run --example roundtrip
//! ```
use anyhow::Context;
use clap::Parser;
use log::{debug, trace};
use nztm::prelude::*;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(name = "roundtrip")]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Number of decimals for grid coordinates (degrees get three more)
    #[clap(short = 'd', long, default_value_t = 3)]
    decimals: usize,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Files of whitespace separated easting/northing pairs. Stdin if none given
    args: Vec<PathBuf>,
}

fn main() -> Result<(), anyhow::Error> {
    let options = Cli::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();
    trace!("This is the NZTM2000 roundtrip checker");
    debug!("{:#?}", options);

    let mut text = String::new();
    if options.args.is_empty() {
        std::io::stdin().read_to_string(&mut text)?;
    } else {
        for path in &options.args {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Cannot read {}", path.display()))?;
            text += &contents;
            text.push('\n');
        }
    }

    // Stop at the first token that is not a number, just like a scanf loop
    let numbers: Vec<f64> = text
        .split_whitespace()
        .map_while(|token| token.parse().ok())
        .collect();
    debug!("Read {} numbers", numbers.len());

    let d = options.decimals;
    for pair in numbers.chunks_exact(2) {
        let (e, n) = (pair[0], pair[1]);
        let (lat, lon) = nztm_to_geodetic(n, e);
        let (n1, e1) = geodetic_to_nztm(lat, lon);
        let dd = d + 3;
        println!("Input NZTM e,n:  {e:12.d$} {n:12.d$}");
        println!(
            "Output Lat/Long: {:12.dd$} {:12.dd$}",
            lat.to_degrees(),
            lon.to_degrees()
        );
        println!("Output NZTM e,n: {e1:12.d$} {n1:12.d$}");
        println!("Difference:      {:12.d$} {:12.d$}\n", e1 - e, n1 - n);
    }
    Ok(())
}
