//! Head to head timing of Maxwell Mean Sort against the baseline sorts on uniformly random `i32`
//! data.
//!
//! Usage: `mean-sort-bench [len] [runs] [json_path]`

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use rand::distributions::Uniform;
use rand::prelude::*;

use sort_test_tools::Sort;

use mean_sort_research::{stable, unstable};

mod measure;
mod report;

const DEFAULT_LEN: usize = 100_000;
const DEFAULT_RUNS: usize = 25;
const BASE_SEED: u64 = 420;
const MAX_VALUE: i32 = 1_000_000;

struct Config {
    len: usize,
    runs: usize,
    json_path: Option<PathBuf>,
}

impl Config {
    fn from_args() -> Self {
        let args = env::args().skip(1).collect::<Vec<_>>();

        Self {
            len: parse_arg(args.first(), DEFAULT_LEN, "len"),
            runs: parse_arg(args.get(1), DEFAULT_RUNS, "runs"),
            json_path: args.get(2).map(PathBuf::from),
        }
    }
}

fn parse_arg<T: FromStr>(arg: Option<&String>, default: T, what: &str) -> T {
    match arg {
        Some(val) => val
            .parse()
            .unwrap_or_else(|_| panic!("Invalid {what}: {val}")),
        None => default,
    }
}

type SortFn = fn(&mut [i32]);

fn contender<S: Sort>() -> (String, SortFn) {
    (S::name(), S::sort::<i32>)
}

fn contenders() -> Vec<(String, SortFn)> {
    #[allow(unused_mut)]
    let mut sorts = vec![
        contender::<unstable::rust_maxwell_mean::SortImpl>(),
        contender::<unstable::rust_quicksort_last::SortImpl>(),
        contender::<unstable::rust_std::SortImpl>(),
        contender::<stable::rust_std::SortImpl>(),
    ];

    #[cfg(feature = "parallel")]
    sorts.push(contender::<unstable::rust_maxwell_mean_parallel::SortImpl>());

    sorts
}

fn gen_input(len: usize, run: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(BASE_SEED + run as u64);
    let dist = Uniform::new_inclusive(0, MAX_VALUE);

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

fn main() {
    let config = Config::from_args();
    let sorts = contenders();

    measure::pin_thread_to_core();

    println!(
        "Comparing {} sorts, len: {} runs: {} values: 0..={MAX_VALUE}",
        sorts.len(),
        config.len,
        config.runs
    );

    let mut report = report::Report::new(config.len, sorts.iter().map(|(name, _)| name.clone()));

    for run in 0..config.runs {
        let input = gen_input(config.len, run);

        let mut expected = input.clone();
        expected.sort();

        println!("\n--- Run {}/{} ---", run + 1, config.runs);

        let mut is_correct = true;
        for (name, sort_fn) in &sorts {
            let mut v = input.clone();
            let duration = measure::measure_duration(|| sort_fn(&mut v));

            let verdict = if v == expected {
                "ok"
            } else {
                is_correct = false;
                "WRONG"
            };

            println!("{name:<40} {:.6} s  [{verdict}]", duration.as_secs_f64());
            report.record(name, duration);
        }

        report.finish_run(is_correct);
    }

    let summary = report.summarize();
    summary.print();

    if let Some(path) = &config.json_path {
        summary.write_json(path);
    }
}
