// src/io/demand.rs

use crate::error::{validate_demand, PlanningError, Result};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where a planning run gets its period demand from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DemandSource {
    Explicit {
        values: Vec<f64>,
    },
    Constant {
        periods: usize,
        value: f64,
    },
    /// `initial` until `step_at`, then `stepped` for the rest of the horizon.
    Step {
        periods: usize,
        initial: f64,
        stepped: f64,
        step_at: usize,
    },
    Normal {
        periods: usize,
        mean: f64,
        std_dev: f64,
        /// Fixes the draw for reproducible runs.
        #[serde(default)]
        seed: Option<u64>,
    },
    Csv {
        path: PathBuf,
    },
}

impl DemandSource {
    /// Produces the demand series and checks it is usable for planning.
    pub fn resolve(&self) -> Result<Vec<f64>> {
        let demand = match self {
            DemandSource::Explicit { values } => values.clone(),
            DemandSource::Constant { periods, value } => {
                generate_constant_demand(*periods, *value)
            }
            DemandSource::Step {
                periods,
                initial,
                stepped,
                step_at,
            } => generate_step_demand(*periods, *initial, *stepped, *step_at),
            DemandSource::Normal {
                periods,
                mean,
                std_dev,
                seed,
            } => generate_normal_demand(*periods, *mean, *std_dev, *seed)?,
            DemandSource::Csv { path } => load_demand_csv(path)?,
        };
        validate_demand(&demand)?;
        Ok(demand)
    }
}

/// The same demand in every period.
pub fn generate_constant_demand(periods: usize, value: f64) -> Vec<f64> {
    vec![value; periods]
}

/// A level shift: `initial` for the first `step_at` periods, `stepped` after.
pub fn generate_step_demand(periods: usize, initial: f64, stepped: f64, step_at: usize) -> Vec<f64> {
    (0..periods)
        .map(|p| if p < step_at { initial } else { stepped })
        .collect()
}

/// Demand drawn from a Normal distribution, rounded to whole units.
///
/// Negative draws are clamped to zero.
pub fn generate_normal_demand(
    periods: usize,
    mean: f64,
    std_dev: f64,
    seed: Option<u64>,
) -> Result<Vec<f64>> {
    let normal =
        Normal::new(mean, std_dev).map_err(|e| PlanningError::InvalidDistribution(e.to_string()))?;

    let schedule = match seed {
        Some(seed) => sample_schedule(&mut StdRng::seed_from_u64(seed), &normal, periods),
        None => sample_schedule(&mut thread_rng(), &normal, periods),
    };
    Ok(schedule)
}

fn sample_schedule<R: Rng + ?Sized>(rng: &mut R, normal: &Normal<f64>, periods: usize) -> Vec<f64> {
    (0..periods)
        .map(|_| normal.sample(rng).round().max(0.0))
        .collect()
}

/// Reads demand from the first column of a CSV file. See [`read_demand`].
pub fn load_demand_csv(path: impl AsRef<Path>) -> Result<Vec<f64>> {
    let file = std::fs::File::open(path)?;
    read_demand(file)
}

/// Reads one demand value per record from the first column.
///
/// A non-numeric first record is taken as a header and skipped; anything
/// non-numeric after that is an error.
pub fn read_demand<R: std::io::Read>(reader: R) -> Result<Vec<f64>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut demand = Vec::new();
    for (index, record) in rdr.records().enumerate() {
        let record = record?;
        let field = record.get(0).unwrap_or("");
        if field.is_empty() {
            continue;
        }
        match field.parse::<f64>() {
            Ok(value) => demand.push(value),
            Err(_) if index == 0 => continue,
            Err(_) => {
                let line = record.position().map(|p| p.line()).unwrap_or(index as u64 + 1);
                return Err(PlanningError::MalformedDemand {
                    line,
                    field: field.to_string(),
                });
            }
        }
    }
    Ok(demand)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_demand_shifts_at_index() {
        assert_eq!(generate_step_demand(5, 4.0, 8.0, 2), vec![4.0, 4.0, 8.0, 8.0, 8.0]);
    }

    #[test]
    fn seeded_normal_demand_is_reproducible() {
        let a = generate_normal_demand(24, 100.0, 20.0, Some(7)).unwrap();
        let b = generate_normal_demand(24, 100.0, 20.0, Some(7)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 24);
        assert!(a.iter().all(|d| *d >= 0.0 && d.fract() == 0.0));
    }

    #[test]
    fn normal_demand_rejects_negative_std_dev() {
        assert!(matches!(
            generate_normal_demand(3, 10.0, -1.0, None),
            Err(PlanningError::InvalidDistribution(_))
        ));
    }

    #[test]
    fn reads_first_column_and_skips_header() {
        let data = "Forecast,Note\n10,a\n 12.5 ,b\n\n7,c\n";
        assert_eq!(read_demand(data.as_bytes()).unwrap(), vec![10.0, 12.5, 7.0]);
    }

    #[test]
    fn malformed_value_reports_line() {
        let data = "10\n11\nlots\n";
        match read_demand(data.as_bytes()) {
            Err(PlanningError::MalformedDemand { line, field }) => {
                assert_eq!(line, 3);
                assert_eq!(field, "lots");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn resolve_rejects_empty_series() {
        let source = DemandSource::Constant {
            periods: 0,
            value: 5.0,
        };
        assert!(matches!(source.resolve(), Err(PlanningError::EmptyDemand)));
    }
}
