//! Aggregate statistics over batch results.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Result, TspError};

use super::record::RunRecord;

/// Summary of a set of [`RunRecord`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    pub runs: usize,
    pub min_cost: f64,
    pub max_cost: f64,

    /// Mean of the two middle values when `runs` is even.
    pub median_cost: f64,

    /// Tour of the first record achieving `min_cost`.
    pub min_tour: Vec<String>,

    /// Tour of the first record achieving `max_cost`.
    pub max_tour: Vec<String>,

    /// Number of distinct best tours.
    pub unique_tours: usize,

    /// Occurrences of each location id across all best tours.
    pub location_frequency: BTreeMap<String, usize>,

    /// Ids sharing the highest frequency, in id order.
    pub most_frequent: Vec<String>,
    pub most_frequent_count: usize,
}

impl BatchSummary {
    /// Computes the summary.
    ///
    /// Returns [`TspError::MalformedRecord`] for an empty slice or a
    /// non-finite cost.
    pub fn from_records(records: &[RunRecord]) -> Result<Self> {
        if records.is_empty() {
            return Err(TspError::MalformedRecord("no records to summarize".into()));
        }
        if let Some(bad) = records.iter().find(|r| !r.best_cost.is_finite()) {
            return Err(TspError::MalformedRecord(format!(
                "run {} has non-finite best distance {}",
                bad.run, bad.best_cost
            )));
        }

        let mut min = &records[0];
        let mut max = &records[0];
        for record in &records[1..] {
            if record.best_cost < min.best_cost {
                min = record;
            }
            if record.best_cost > max.best_cost {
                max = record;
            }
        }

        let mut costs: Vec<f64> = records.iter().map(|r| r.best_cost).collect();
        costs.sort_by(f64::total_cmp);
        let mid = costs.len() / 2;
        let median_cost = if costs.len() % 2 == 0 {
            (costs[mid - 1] + costs[mid]) / 2.0
        } else {
            costs[mid]
        };

        let unique_tours = records
            .iter()
            .map(|r| r.best_tour.as_str())
            .collect::<BTreeSet<_>>()
            .len();

        let mut location_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for record in records {
            for id in record.tour_ids() {
                *location_frequency.entry(id.to_string()).or_default() += 1;
            }
        }
        let most_frequent_count = location_frequency.values().copied().max().unwrap_or(0);
        let most_frequent = location_frequency
            .iter()
            .filter(|&(_, &count)| count == most_frequent_count)
            .map(|(id, _)| id.clone())
            .collect();

        Ok(Self {
            runs: records.len(),
            min_cost: min.best_cost,
            max_cost: max.best_cost,
            median_cost,
            min_tour: owned_ids(min),
            max_tour: owned_ids(max),
            unique_tours,
            location_frequency,
            most_frequent,
            most_frequent_count,
        })
    }
}

fn owned_ids(record: &RunRecord) -> Vec<String> {
    record.tour_ids().into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::TOUR_DELIMITER;

    fn record(run: usize, cost: f64, tour: &[&str]) -> RunRecord {
        RunRecord {
            run,
            population_size: 10,
            crossover_rate: 0.8,
            mutation_rate: 0.2,
            generations: 5,
            best_cost: cost,
            best_tour: tour.join(TOUR_DELIMITER),
        }
    }

    #[test]
    fn test_summary_statistics() {
        let records = vec![
            record(1, 42.0, &["A", "B", "C", "D"]),
            record(2, 40.0, &["A", "C", "B", "D"]),
            record(3, 48.0, &["B", "A", "C", "D"]),
            record(4, 40.0, &["A", "C", "B", "D"]),
        ];
        let summary = BatchSummary::from_records(&records).unwrap();

        assert_eq!(summary.runs, 4);
        assert_eq!(summary.min_cost, 40.0);
        assert_eq!(summary.max_cost, 48.0);
        assert!((summary.median_cost - 41.0).abs() < 1e-12);
        assert_eq!(summary.min_tour, vec!["A", "C", "B", "D"]);
        assert_eq!(summary.max_tour, vec!["B", "A", "C", "D"]);
        assert_eq!(summary.unique_tours, 3);
        assert_eq!(summary.location_frequency.get("A"), Some(&4));
        assert_eq!(summary.most_frequent, vec!["A", "B", "C", "D"]);
        assert_eq!(summary.most_frequent_count, 4);
    }

    #[test]
    fn test_odd_count_median() {
        let records = vec![
            record(1, 3.0, &["A", "B"]),
            record(2, 1.0, &["A", "B"]),
            record(3, 2.0, &["B", "A"]),
        ];
        let summary = BatchSummary::from_records(&records).unwrap();
        assert_eq!(summary.median_cost, 2.0);
        assert_eq!(summary.unique_tours, 2);
    }

    #[test]
    fn test_first_record_wins_ties() {
        let records = vec![record(1, 5.0, &["A", "B"]), record(2, 5.0, &["B", "A"])];
        let summary = BatchSummary::from_records(&records).unwrap();
        assert_eq!(summary.min_tour, vec!["A", "B"]);
        assert_eq!(summary.max_tour, vec!["A", "B"]);
    }

    #[test]
    fn test_uneven_frequency() {
        // Rows read back from a hand-edited file need not cover every id.
        let records = vec![record(1, 1.0, &["A", "B"]), record(2, 2.0, &["A", "C"])];
        let summary = BatchSummary::from_records(&records).unwrap();
        assert_eq!(summary.most_frequent, vec!["A"]);
        assert_eq!(summary.most_frequent_count, 2);
        assert_eq!(summary.location_frequency.get("C"), Some(&1));
    }

    #[test]
    fn test_empty_records_rejected() {
        assert!(matches!(
            BatchSummary::from_records(&[]),
            Err(TspError::MalformedRecord(_))
        ));
    }

    #[test]
    fn test_non_finite_cost_rejected() {
        let records = vec![record(1, f64::NAN, &["A", "B"])];
        assert!(matches!(
            BatchSummary::from_records(&records),
            Err(TspError::MalformedRecord(_))
        ));
    }

    #[test]
    fn test_summary_of_batch_run() {
        use crate::batch::{BatchRunner, ParameterGrid};
        use crate::instance::TspInstance;

        let instance = TspInstance::from_coordinates(
            &["A", "B", "C", "D", "E"],
            &[(0.0, 0.0), (4.0, 0.0), (5.0, 3.0), (2.0, 5.0), (-1.0, 3.0)],
        )
        .unwrap();
        let grid = ParameterGrid::default()
            .with_population_sizes(vec![20])
            .with_crossover_rates(vec![0.8])
            .with_mutation_rates(vec![0.2])
            .with_generations(vec![10])
            .with_runs_per_config(4)
            .with_base_seed(1);
        let records = BatchRunner::run(&instance, &grid).unwrap();
        let summary = BatchSummary::from_records(&records).unwrap();

        assert_eq!(summary.runs, 4);
        assert!(summary.min_cost <= summary.median_cost);
        assert!(summary.median_cost <= summary.max_cost);
        assert_eq!(summary.location_frequency.len(), 5);
        assert_eq!(summary.most_frequent_count, 4);
        assert_eq!(summary.most_frequent.len(), 5);
    }
}
