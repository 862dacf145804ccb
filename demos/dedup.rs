//! A simple de-duplication example.
//!
//! In this example, lines are read from standard input, and each line is
//! printed only the first time it is seen.
//!
//! Once the input is exhausted, lines containing the word given as first
//! argument, if any, are erased in a single cursor pass, and the survivors are
//! counted.
//!
//! Run with `RUST_LOG=debug` to observe the set growing.

extern crate chained;
extern crate env_logger;

use std::env;
use std::io::{self, BufRead};

use chained::hashset::HashSet;

fn main() -> io::Result<()> {
    env_logger::init();

    let banned = env::args().nth(1);

    let mut seen: HashSet<String> = HashSet::with_capacity(8);

    for line in io::stdin().lock().lines() {
        let line = line?;

        if seen.contains(line.as_str()) {
            continue;
        }

        println!("{}", line);
        seen.insert(line);
    }

    let unique = seen.len();

    if let Some(banned) = banned {
        let mut cursor = seen.begin();

        while !seen.is_end(cursor) {
            cursor = if seen.value(cursor).contains(banned.as_str()) {
                seen.erase(cursor)
            } else {
                seen.advance(cursor)
            };
        }
    }

    eprintln!("{} unique lines, {} kept, {} buckets ({} occupied)",
        unique, seen.len(), seen.capacity(), seen.occupied_buckets());

    Ok(())
}
