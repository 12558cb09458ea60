//! CSV codec for decision records.
//!
//! Works on any `Read`/`Write` so it can be exercised without files; the
//! async file functions in the parent module wrap it.

use std::io::{Read, Write};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use super::{HEADER, HistoryError};
use crate::domain::DecisionRecord;

/// Write the header plus one row per record, in slice order.
pub fn write_records<W: Write>(writer: W, records: &[DecisionRecord]) -> Result<(), HistoryError> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(HEADER)?;
    for r in records {
        // Display gives the shortest representation that parses back exactly,
        // and writes whole numbers without a fraction ("5", not "5.0").
        let outcome = r.outcome.to_string();
        wtr.write_record([
            r.game.as_str(),
            r.timeframe.as_str(),
            r.strategy.as_str(),
            r.action.as_str(),
            outcome.as_str(),
            r.timestamp.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read records written by [`write_records`].
///
/// An empty input or a header-only input is an empty history. A header that
/// differs from [`HEADER`] or an Outcome that is not a number is corruption.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<DecisionRecord>, HistoryError> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }
    if headers.iter().ne(HEADER.iter().copied()) {
        return Err(HistoryError::UnexpectedHeader(
            headers.iter().collect::<Vec<_>>().join(","),
        ));
    }

    let mut records = Vec::new();
    for row in rdr.records() {
        records.push(parse_row(&row?)?);
    }
    Ok(records)
}

fn parse_row(row: &StringRecord) -> Result<DecisionRecord, HistoryError> {
    let line = row.position().map(|p| p.line()).unwrap_or_default();
    let raw = &row[4];
    let outcome = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| HistoryError::InvalidOutcome {
            line,
            value: raw.to_string(),
        })?;

    Ok(DecisionRecord {
        game: row[0].to_string(),
        timeframe: row[1].to_string(),
        strategy: row[2].to_string(),
        action: row[3].to_string(),
        outcome,
        timestamp: row[5].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<DecisionRecord> {
        vec![
            DecisionRecord::new(
                "foodDelivery",
                "day",
                "minimax",
                "Cook Meal",
                5.0,
                "2024-03-20T10:00:00Z",
            ),
            DecisionRecord::new(
                "productivity",
                "day",
                "nashEquilibrium",
                "Deep Work",
                4.0,
                "2024-03-20T11:00:00Z",
            ),
        ]
    }

    fn encode(records: &[DecisionRecord]) -> String {
        let mut buf = Vec::new();
        write_records(&mut buf, records).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn writes_header_and_plain_rows() {
        let text = encode(&sample());
        assert!(text.starts_with("Game,Timeframe,Strategy,Action,Outcome,Timestamp\n"));
        assert!(text.contains("foodDelivery,day,minimax,Cook Meal,5,2024-03-20T10:00:00Z"));
        assert!(text.contains("productivity,day,nashEquilibrium,Deep Work,4,2024-03-20T11:00:00Z"));
    }

    #[test]
    fn reads_back_what_it_wrote() {
        let mut records = sample();
        records.push(DecisionRecord::new(
            "custom",
            "week",
            "titForTat",
            "Rest, then run",
            -2.75,
            "2024-03-21T08:15:30.123Z",
        ));
        let back = read_records(encode(&records).as_bytes()).unwrap();
        assert_eq!(back, records);
    }

    #[test]
    fn header_only_is_empty() {
        let back = read_records("Game,Timeframe,Strategy,Action,Outcome,Timestamp\n".as_bytes())
            .unwrap();
        assert!(back.is_empty());
        assert!(read_records("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn skips_blank_lines() {
        let text = "Game,Timeframe,Strategy,Action,Outcome,Timestamp\n\n\
                    foodDelivery,day,minimax,Cook Meal,3,2024-03-20T10:00:00Z\n\n";
        assert_eq!(read_records(text.as_bytes()).unwrap().len(), 1);
    }

    #[test]
    fn non_numeric_outcome_is_corruption() {
        let text = "Game,Timeframe,Strategy,Action,Outcome,Timestamp\n\
                    foodDelivery,day,minimax,Cook Meal,3,2024-03-20T10:00:00Z\n\
                    foodDelivery,day,minimax,Cook Meal,tasty,2024-03-20T11:00:00Z\n";
        let err = read_records(text.as_bytes()).unwrap_err();
        match err {
            HistoryError::InvalidOutcome { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "tasty");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn wrong_header_is_corruption() {
        let text = "game,timeframe,strategy,action,outcome,timestamp\n";
        assert!(matches!(
            read_records(text.as_bytes()),
            Err(HistoryError::UnexpectedHeader(_))
        ));
    }

    #[test]
    fn short_row_is_corruption() {
        let text = "Game,Timeframe,Strategy,Action,Outcome,Timestamp\nfoodDelivery,day\n";
        assert!(matches!(
            read_records(text.as_bytes()),
            Err(HistoryError::Csv(_))
        ));
    }
}
