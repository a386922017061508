use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Serialize;

const BAR_WIDTH: usize = 40;

/// Aggregated timings of one sort implementation across all runs, in seconds.
#[derive(Debug, Serialize)]
pub struct SortSummary {
    pub name: String,
    pub mean: f64,
    pub stdev: f64,
    pub min: f64,
    pub max: f64,
    pub percent_slower: f64,
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub len: usize,
    pub runs: usize,
    pub correct_runs: usize,
    /// Fastest first.
    pub sorts: Vec<SortSummary>,
}

pub struct Report {
    len: usize,
    runs: usize,
    failures: usize,
    timings: Vec<(String, Vec<Duration>)>,
}

impl Report {
    pub fn new(len: usize, names: impl IntoIterator<Item = String>) -> Self {
        Self {
            len,
            runs: 0,
            failures: 0,
            timings: names.into_iter().map(|name| (name, Vec::new())).collect(),
        }
    }

    pub fn record(&mut self, name: &str, duration: Duration) {
        let (_, durations) = self
            .timings
            .iter_mut()
            .find(|(existing, _)| existing == name)
            .unwrap_or_else(|| panic!("Unknown sort: {name}"));

        durations.push(duration);
    }

    /// Marks the end of a run, `is_correct` is false if any output differed from the reference.
    pub fn finish_run(&mut self, is_correct: bool) {
        self.runs += 1;
        if !is_correct {
            self.failures += 1;
        }
    }

    pub fn summarize(&self) -> Summary {
        let mut sorts = self
            .timings
            .iter()
            .filter(|(_, durations)| !durations.is_empty())
            .map(|(name, durations)| {
                let secs = durations.iter().map(Duration::as_secs_f64).collect::<Vec<_>>();
                let (mean, stdev) = mean_stdev(&secs);

                SortSummary {
                    name: name.clone(),
                    mean,
                    stdev,
                    min: secs.iter().copied().fold(f64::INFINITY, f64::min),
                    max: secs.iter().copied().fold(0.0, f64::max),
                    percent_slower: 0.0,
                }
            })
            .collect::<Vec<_>>();

        sorts.sort_by(|a, b| a.mean.total_cmp(&b.mean));

        if let Some(best) = sorts.first().map(|sort| sort.mean) {
            for sort in &mut sorts {
                sort.percent_slower = if best > 0.0 {
                    ((sort.mean - best) / best) * 100.0
                } else {
                    0.0
                };
            }
        }

        Summary {
            len: self.len,
            runs: self.runs,
            correct_runs: self.runs - self.failures,
            sorts,
        }
    }
}

impl Summary {
    pub fn print(&self) {
        let Some(best) = self.sorts.first() else {
            println!("\nNo runs.");
            return;
        };

        println!("\nFastest: {} ({:.6} s)", best.name, best.mean);
        println!("\n=== SORTING PERFORMANCE SUMMARY (len {}) ===", self.len);
        println!(
            "{:<40} {:<15} {:<12} {:<10} {:<10} {:<10}  Bar",
            "Sort", "Avg Time (s)", "% Slower", "Stdev", "Min", "Max"
        );

        for sort in &self.sorts {
            let bar_len = if sort.mean > 0.0 {
                ((best.mean / sort.mean) * BAR_WIDTH as f64) as usize
            } else {
                BAR_WIDTH
            };

            println!(
                "{:<40} {:<15.6} {:<12.2} {:<10.6} {:<10.6} {:<10.6}  {}",
                sort.name,
                sort.mean,
                sort.percent_slower,
                sort.stdev,
                sort.min,
                sort.max,
                "█".repeat(bar_len)
            );
        }

        println!("\nCorrect runs: {}/{}", self.correct_runs, self.runs);
    }

    pub fn write_json(&self, path: &Path) {
        fs::write(path, serde_json::to_string_pretty(self).unwrap()).unwrap();
        println!("Wrote summary to file: {}", path.display());
    }
}

/// Mean and sample standard deviation, the latter is 0 for fewer than two values.
fn mean_stdev(values: &[f64]) -> (f64, f64) {
    let len = values.len() as f64;
    let mean = values.iter().sum::<f64>() / len;

    if values.len() < 2 {
        return (mean, 0.0);
    }

    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (len - 1.0);
    (mean, variance.sqrt())
}
