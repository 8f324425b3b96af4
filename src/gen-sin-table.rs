use itertools::Itertools;
use std::fs::File;
use std::io::{BufWriter, Result, Write};
use std::path::Path;
use std::process;
use structopt::StructOpt;

/// Number of entries in the emitted table (`SIN_ARRAY_LEN` on the consumer side).
const SIN_ARRAY_LEN: u8 = 126;

/// Samples are stored as sin() scaled by this factor.
const SCALE: f64 = 100.0;

/// Each index step advances the angle by 1/20 radian.
const ANGLE_DIVISOR: f64 = 20.0;

const OUTPUT_PATH: &str = "test.txt";

const HEADER: &str = "constexpr int8_t sin_array[SIN_ARRAY_LEN] = { ";
const FOOTER: &str = "};";

/// Computes the table entry for the given index, truncated toward zero.
fn sample(index: u8) -> i8 {
    (SCALE * (f64::from(index) / ANGLE_DIVISOR).sin()) as i8
}

/// Renders the complete array declaration into `out`.
fn write_table<W: Write>(mut out: W) -> Result<()> {
    let samples = (0..SIN_ARRAY_LEN)
        .map(sample)
        .format_with("", |value, f| f(&format_args!("{}, ", value)));

    write!(out, "{}{}{}", HEADER, samples, FOOTER)
}

fn generate_to<P: AsRef<Path>>(path: P) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);

    write_table(&mut file)?;

    file.flush() // BufWriter ignores flush errors on drop
}

fn generate() -> Result<()> {
    generate_to(OUTPUT_PATH)
}

fn main() {
    let Opt {} = Opt::from_args();

    if let Err(err) = generate() {
        eprintln!("fatal error: {}", err);
        process::exit(1); // report failure
    }
}

#[derive(StructOpt)]
#[structopt(about)]
struct Opt {}
