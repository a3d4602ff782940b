use super::write_values;
use crate::error::Result;
use classics_order::{quicksort_seeded, select_seeded};
use log::info;
use rand::Rng;
use std::io::Write;
use structopt::clap::AppSettings;
use structopt::StructOpt;

const SAMPLE_SORT: [i64; 10] = [9, 3, 7, 1, 8, 2, 5, 4, 6, 0];
const SAMPLE_SELECT: [i64; 10] = [7, 1, 5, 3, 9, 2, 8, 6, 4, 0];

#[derive(Debug, StructOpt)]
#[structopt(setting = AppSettings::AllowNegativeNumbers)]
pub struct QuicksortArgs {
    /// Seed for pivot selection; random when omitted
    #[structopt(long)]
    seed: Option<u64>,

    /// Values to sort [default: 9 3 7 1 8 2 5 4 6 0]
    values: Vec<i64>,
}

#[derive(Debug, StructOpt)]
#[structopt(setting = AppSettings::AllowNegativeNumbers)]
pub struct SelectArgs {
    /// Rank to select, 0-based
    #[structopt(short, default_value = "4")]
    k: usize,

    /// Seed for pivot selection; random when omitted
    #[structopt(long)]
    seed: Option<u64>,

    /// Values to select from [default: 7 1 5 3 9 2 8 6 4 0]
    values: Vec<i64>,
}

fn resolve_seed(seed: Option<u64>) -> u64 {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("pivot seed {}", seed);
    seed
}

fn values_or(values: &[i64], sample: &[i64]) -> Vec<i64> {
    if values.is_empty() {
        sample.to_vec()
    } else {
        values.to_vec()
    }
}

pub fn run_quicksort(args: &QuicksortArgs, out: &mut dyn Write) -> Result<()> {
    let mut values = values_or(&args.values, &SAMPLE_SORT);
    let report = quicksort_seeded(&mut values, resolve_seed(args.seed));

    write_values(out, "Sorted:", &values)?;
    writeln!(out, "Comparisons: {}", report.comparisons)?;
    Ok(())
}

pub fn run_select(args: &SelectArgs, out: &mut dyn Write) -> Result<()> {
    let mut values = values_or(&args.values, &SAMPLE_SELECT);
    let value = select_seeded(&mut values, args.k, resolve_seed(args.seed))?;

    writeln!(out, "k-th smallest (k={}): {}", args.k, value)?;
    Ok(())
}
