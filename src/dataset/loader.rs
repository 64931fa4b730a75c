//! CSV loading of passenger files and writing of prediction files.
//!
//! Two header widths are accepted:
//!
//! ```text
//! labeled   (12): PassengerId,Survived,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked
//! unlabeled (11): PassengerId,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked
//! ```
//!
//! Numeric fields are parsed leniently: blank or unparsable values become `0`
//! (non-blank garbage is logged with `warn!`). Rows shorter than the header
//! are skipped.

use crate::dataset::{Passenger, Port};
use crate::error::{Result, TitanicError};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use tracing::{debug, info, warn};

const LABELED_WIDTH: usize = 12;
const UNLABELED_WIDTH: usize = 11;

/// Column layout detected from the header row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Layout {
    Labeled,
    Unlabeled,
}

impl Layout {
    fn from_width(width: usize) -> Result<Self> {
        match width {
            LABELED_WIDTH => Ok(Layout::Labeled),
            UNLABELED_WIDTH => Ok(Layout::Unlabeled),
            other => Err(TitanicError::InvalidFormat(format!(
                "expected {} (labeled) or {} (unlabeled) columns, got {}",
                LABELED_WIDTH, UNLABELED_WIDTH, other
            ))),
        }
    }

    fn width(self) -> usize {
        match self {
            Layout::Labeled => LABELED_WIDTH,
            Layout::Unlabeled => UNLABELED_WIDTH,
        }
    }

    /// Position of a column given its index in the labeled layout.
    fn position(self, labeled_index: usize) -> usize {
        match self {
            Layout::Labeled => labeled_index,
            Layout::Unlabeled if labeled_index > 1 => labeled_index - 1,
            Layout::Unlabeled => labeled_index,
        }
    }
}

/// Load all passengers from a CSV file.
pub fn load_passengers<P: AsRef<Path>>(path: P) -> Result<Vec<Passenger>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let passengers = read_passengers(BufReader::new(file))?;
    info!(path = %path.display(), count = passengers.len(), "loaded passengers");
    Ok(passengers)
}

/// Read all passengers from any CSV source with a header row.
pub fn read_passengers<R: Read>(reader: R) -> Result<Vec<Passenger>> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    let layout = Layout::from_width(rdr.headers()?.len())?;

    let mut passengers = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        if record.len() < layout.width() {
            debug!(line, fields = record.len(), "skipping short row");
            continue;
        }
        passengers.push(parse_record(&record, layout, line));
    }
    Ok(passengers)
}

fn parse_record(record: &StringRecord, layout: Layout, line: u64) -> Passenger {
    let field = |labeled_index: usize| record.get(layout.position(labeled_index)).unwrap_or("");

    let survived = match layout {
        Layout::Labeled => Some(parse_u32(field(1), "Survived", line) == 1),
        Layout::Unlabeled => None,
    };

    Passenger {
        passenger_id: parse_u32(field(0), "PassengerId", line),
        survived,
        pclass: parse_u32(field(2), "Pclass", line),
        name: field(3).to_string(),
        sex: field(4).trim().to_string(),
        age: parse_f64(field(5), "Age", line),
        sib_sp: parse_u32(field(6), "SibSp", line),
        parch: parse_u32(field(7), "Parch", line),
        ticket: field(8).to_string(),
        fare: parse_f64(field(9), "Fare", line),
        cabin: field(10).trim().to_string(),
        embarked: Port::from_code(field(11)),
    }
}

fn parse_f64(raw: &str, column: &str, line: u64) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            warn!(column, line, value = trimmed, "unparsable number, using 0");
            0.0
        }
    }
}

/// Whole-number column read through the float parser, so `"3"` and `"3.0"`
/// both give 3. Negative, fractional or out-of-range values are logged and
/// become 0.
fn parse_u32(raw: &str, column: &str, line: u64) -> u32 {
    let value = parse_f64(raw, column, line);
    if value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        value as u32
    } else {
        warn!(column, line, value, "not a whole non-negative number, using 0");
        0
    }
}

/// Write `(PassengerId, Survived)` pairs as CSV with a header row.
pub fn write_predictions<W: Write>(writer: W, predictions: &[(u32, bool)]) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_writer(writer);
    wtr.write_record(["PassengerId", "Survived"])?;
    for &(id, survived) in predictions {
        let label = if survived { "1" } else { "0" };
        wtr.write_record([id.to_string().as_str(), label])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write predictions to `path`, creating parent directories as needed.
pub fn write_predictions_to_file<P: AsRef<Path>>(
    path: P,
    predictions: &[(u32, bool)],
) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    write_predictions(File::create(path)?, predictions)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELED: &str = "\
PassengerId,Survived,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked
1,0,3,\"Braund, Mr. Owen Harris\",male,22,1,0,A/5 21171,7.25,,S
2,1,1,\"Cumings, Mrs. John Bradley (Florence Briggs Thayer)\",female,38,1,0,PC 17599,71.2833,C85,C
6,0,3,\"Moran, Mr. James\",male,,0,0,330877,8.4583,,Q
";

    const UNLABELED: &str = "\
PassengerId,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked
892,3,\"Kelly, Mr. James\",male,34.5,0,0,330911,7.8292,,Q
";

    #[test]
    fn test_read_labeled() {
        let passengers = read_passengers(LABELED.as_bytes()).unwrap();
        assert_eq!(passengers.len(), 3);

        let p = &passengers[1];
        assert_eq!(p.passenger_id, 2);
        assert_eq!(p.survived, Some(true));
        assert_eq!(p.pclass, 1);
        assert_eq!(p.sex, "female");
        assert_eq!(p.age, 38.0);
        assert_eq!(p.sib_sp, 1);
        assert_eq!(p.parch, 0);
        assert_eq!(p.ticket, "PC 17599");
        assert_eq!(p.fare, 71.2833);
        assert_eq!(p.cabin, "C85");
        assert_eq!(p.embarked, Port::Cherbourg);
    }

    #[test]
    fn test_missing_age_defaults_to_zero() {
        let passengers = read_passengers(LABELED.as_bytes()).unwrap();
        assert_eq!(passengers[2].age, 0.0);
        assert_eq!(passengers[2].embarked, Port::Queenstown);
        assert_eq!(passengers[0].cabin, "");
    }

    #[test]
    fn test_read_unlabeled() {
        let passengers = read_passengers(UNLABELED.as_bytes()).unwrap();
        assert_eq!(passengers.len(), 1);
        let p = &passengers[0];
        assert_eq!(p.passenger_id, 892);
        assert_eq!(p.survived, None);
        assert_eq!(p.pclass, 3);
        assert_eq!(p.name, "Kelly, Mr. James");
        assert_eq!(p.age, 34.5);
        assert_eq!(p.fare, 7.8292);
        assert_eq!(p.embarked, Port::Queenstown);
    }

    #[test]
    fn test_unparsable_numbers_default_to_zero() {
        let csv = "\
PassengerId,Survived,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked
7,1,x,\"Doe, Miss. Jane\",female,old,?,1,T,cheap,,S
";
        let passengers = read_passengers(csv.as_bytes()).unwrap();
        let p = &passengers[0];
        assert_eq!(p.pclass, 0);
        assert_eq!(p.age, 0.0);
        assert_eq!(p.sib_sp, 0);
        assert_eq!(p.parch, 1);
        assert_eq!(p.fare, 0.0);
    }

    #[test]
    fn test_float_formatted_counts_are_read() {
        let csv = "\
PassengerId,Survived,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked
5.0,1.0,2.0,\"Doe, Miss. Jane\",female,19,1.0,2,T,13,,S
6,0,3,\"Doe, Mr. John\",male,40,-1,1.5,T,8,,S
";
        let passengers = read_passengers(csv.as_bytes()).unwrap();
        let p = &passengers[0];
        assert_eq!(p.passenger_id, 5);
        assert_eq!(p.survived, Some(true));
        assert_eq!(p.pclass, 2);
        assert_eq!(p.sib_sp, 1);
        assert_eq!(p.parch, 2);

        assert_eq!(passengers[1].sib_sp, 0);
        assert_eq!(passengers[1].parch, 0);
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let csv = "\
PassengerId,Survived,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked
1,0,3
2,1,1,\"Doe, Mrs. Jane\",female,30,0,0,T,10,,S
";
        let passengers = read_passengers(csv.as_bytes()).unwrap();
        assert_eq!(passengers.len(), 1);
        assert_eq!(passengers[0].passenger_id, 2);
    }

    #[test]
    fn test_unknown_layout_is_rejected() {
        let err = read_passengers("a,b,c\n1,2,3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, TitanicError::InvalidFormat(_)));
    }

    #[test]
    fn test_write_predictions() {
        let mut out = Vec::new();
        write_predictions(&mut out, &[(1, false), (2, true)]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "PassengerId,Survived\n1,0\n2,1\n");
    }

    #[test]
    fn test_write_predictions_to_file_creates_dirs() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let path = tmp.path().join("out").join("predictions.csv");
        write_predictions_to_file(&path, &[(3, true)])?;
        let text = std::fs::read_to_string(&path)?;
        assert_eq!(text, "PassengerId,Survived\n3,1\n");
        Ok(())
    }

    #[test]
    fn test_load_passengers_missing_file() {
        let err = load_passengers("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, TitanicError::Io(_)));
    }
}
