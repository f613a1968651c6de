//! Batch result rows and their CSV form.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Separator between location ids in [`RunRecord::best_tour`].
pub const TOUR_DELIMITER: &str = " -> ";

/// One GA run within a batch.
///
/// CSV headers: `Run, Population Size, Crossover Rate, Mutation Rate,
/// Generations, Best Distance, Best Path`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// 1-based run number within its parameter combination.
    #[serde(rename = "Run")]
    pub run: usize,

    #[serde(rename = "Population Size")]
    pub population_size: usize,

    #[serde(rename = "Crossover Rate")]
    pub crossover_rate: f64,

    #[serde(rename = "Mutation Rate")]
    pub mutation_rate: f64,

    #[serde(rename = "Generations")]
    pub generations: usize,

    #[serde(rename = "Best Distance")]
    pub best_cost: f64,

    /// Location ids joined by [`TOUR_DELIMITER`].
    #[serde(rename = "Best Path")]
    pub best_tour: String,
}

impl RunRecord {
    /// Splits [`best_tour`](Self::best_tour) back into location ids.
    pub fn tour_ids(&self) -> Vec<&str> {
        if self.best_tour.is_empty() {
            return Vec::new();
        }
        self.best_tour.split(TOUR_DELIMITER).collect()
    }
}

/// Writes records as CSV with a header row.
pub fn write_records<W: Write>(writer: W, records: &[RunRecord]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for record in records {
        csv.serialize(record)?;
    }
    csv.flush()?;
    Ok(())
}

/// Reads records from CSV with a header row.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<RunRecord>> {
    let mut csv = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for row in csv.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<RunRecord> {
        vec![
            RunRecord {
                run: 1,
                population_size: 100,
                crossover_rate: 0.6,
                mutation_rate: 0.1,
                generations: 100,
                best_cost: 61.137,
                best_tour: "Gliwice -> Cairo -> Rome".to_string(),
            },
            RunRecord {
                run: 2,
                population_size: 100,
                crossover_rate: 0.6,
                mutation_rate: 0.1,
                generations: 100,
                best_cost: 63.5,
                best_tour: "São Paulo, SP -> Rio".to_string(),
            },
        ]
    }

    #[test]
    fn test_header_row() {
        let mut buf = Vec::new();
        write_records(&mut buf, &sample()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(
            header,
            "Run,Population Size,Crossover Rate,Mutation Rate,Generations,Best Distance,Best Path"
        );
        assert!(text.contains("Gliwice -> Cairo -> Rome"));
    }

    #[test]
    fn test_write_then_read_with_quoted_ids() {
        let records = sample();
        let mut buf = Vec::new();
        write_records(&mut buf, &records).unwrap();
        let parsed = read_records(buf.as_slice()).unwrap();
        assert_eq!(parsed, records);
        assert_eq!(parsed[1].tour_ids(), vec!["São Paulo, SP", "Rio"]);
    }

    #[test]
    fn test_read_rejects_bad_number() {
        let text = "Run,Population Size,Crossover Rate,Mutation Rate,Generations,Best Distance,Best Path\n\
                    1,100,0.6,0.1,100,not-a-number,A -> B\n";
        assert!(read_records(text.as_bytes()).is_err());
    }

    #[test]
    fn test_tour_ids() {
        let record = &sample()[0];
        assert_eq!(record.tour_ids(), vec!["Gliwice", "Cairo", "Rome"]);
    }
}
