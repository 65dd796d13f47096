use std::collections::HashMap;

use crate::models::Record;

/// Merge record sources keyed by ticker.
///
/// A later record replaces an earlier one with the same ticker but keeps the
/// earlier one's position, so the output order is first-seen order.
/// Records without a ticker are dropped.
pub fn merge_by_ticker<I>(records: I) -> Vec<Record>
where
    I: IntoIterator<Item = Record>,
{
    let mut merged: Vec<Record> = Vec::new();
    let mut position: HashMap<String, usize> = HashMap::new();

    for record in records {
        if record.ticker.trim().is_empty() {
            continue;
        }
        match position.get(&record.ticker) {
            Some(&idx) => merged[idx] = record,
            None => {
                position.insert(record.ticker.clone(), merged.len());
                merged.push(record);
            }
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_source_wins_in_first_position() {
        let merged = merge_by_ticker(vec![
            Record::stock("Infosys Limited", "INFY.NS"),
            Record::stock("Wipro", "WIPRO.NS"),
            Record::stock("Infosys", "INFY.NS"),
        ]);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].ticker, "INFY.NS");
        assert_eq!(merged[0].name, "Infosys");
        assert_eq!(merged[1].ticker, "WIPRO.NS");
    }

    #[test]
    fn test_blank_tickers_dropped() {
        let merged = merge_by_ticker(vec![Record::stock("Ghost", ""), Record::stock("A", "A")]);
        assert_eq!(merged.len(), 1);
    }
}
