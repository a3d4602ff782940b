use super::write_values;
use crate::error::Result;
use classics_core::Error;
use classics_index::{DuplicatePolicy, OrderedTree};
use log::{debug, warn};
use std::io::Write;
use structopt::clap::AppSettings;
use structopt::StructOpt;

const SAMPLE_KEYS: [i64; 8] = [10, 20, 5, 6, 12, 30, 7, 17];

#[derive(Debug, StructOpt)]
#[structopt(setting = AppSettings::AllowNegativeNumbers)]
pub struct BtreeArgs {
    /// Minimum degree t: nodes hold between t-1 and 2t-1 keys
    #[structopt(short = "t", long = "degree", default_value = "3")]
    degree: usize,

    /// Skip keys that are already present instead of storing them again
    #[structopt(long)]
    unique: bool,

    /// Key to look up once every key is inserted (repeatable)
    #[structopt(long, number_of_values = 1)]
    search: Vec<i64>,

    /// Keys to insert, in order [default: 10 20 5 6 12 30 7 17]
    keys: Vec<i64>,
}

pub fn run(args: &BtreeArgs, out: &mut dyn Write) -> Result<()> {
    let policy = if args.unique {
        DuplicatePolicy::Reject
    } else {
        DuplicatePolicy::Allow
    };
    let mut tree = OrderedTree::with_policy(args.degree, policy)?;

    let keys = if args.keys.is_empty() {
        SAMPLE_KEYS.to_vec()
    } else {
        args.keys.clone()
    };
    for key in keys {
        match tree.insert(key) {
            Ok(()) => {}
            Err(Error::DuplicateKey) => warn!("skipping duplicate key {}", key),
            Err(err) => return Err(err.into()),
        }
    }
    debug!("tree stats: {:?}", tree.stats());

    write_values(out, "B-Tree traversal:", tree.traverse())?;
    writeln!(
        out,
        "Height: {} (minimum degree {}, {} keys)",
        tree.height(),
        tree.min_degree(),
        tree.len()
    )?;
    for key in &args.search {
        let status = if tree.contains(key) { "found" } else { "not found" };
        writeln!(out, "Key {} {}", key, status)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(degree: usize, unique: bool, search: Vec<i64>, keys: Vec<i64>) -> BtreeArgs {
        BtreeArgs {
            degree,
            unique,
            search,
            keys,
        }
    }

    fn output(args: &BtreeArgs) -> String {
        let mut out = Vec::new();
        run(args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_default_keys() {
        let text = output(&args(3, false, vec![12, 11], vec![]));
        assert_eq!(
            text,
            "B-Tree traversal: 5 6 7 10 12 17 20 30\n\
             Height: 2 (minimum degree 3, 8 keys)\n\
             Key 12 found\n\
             Key 11 not found\n"
        );
    }

    #[test]
    fn test_unique_skips_duplicates() {
        let text = output(&args(2, true, vec![], vec![3, -1, 3, 2]));
        assert!(text.starts_with("B-Tree traversal: -1 2 3\n"));
    }

    #[test]
    fn test_invalid_degree() {
        let mut out = Vec::new();
        let err = run(&args(1, false, vec![], vec![]), &mut out).unwrap_err();
        assert!(err.to_string().contains("min_degree"));
    }

    #[test]
    fn test_parse_arguments() {
        let parsed =
            BtreeArgs::from_iter_safe(&["btree", "-t", "2", "--search", "4", "5", "-3", "4"])
                .unwrap();
        assert_eq!(parsed.degree, 2);
        assert_eq!(parsed.search, vec![4]);
        assert_eq!(parsed.keys, vec![5, -3, 4]);
    }
}
