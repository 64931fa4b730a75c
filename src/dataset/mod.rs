//! Passenger records and the data plumbing around them.
//!
//! - [`Passenger`]: one raw observation, already split into named fields.
//! - [`loader`]: lenient CSV reading/writing of passenger files and prediction output.
//! - [`memory`]: the in-memory design matrix consumed by the trainer.

pub mod loader;
pub mod memory;

pub use self::loader::{
    load_passengers, read_passengers, write_predictions, write_predictions_to_file,
};
pub use self::memory::DesignMatrix;

/// Port of embarkation. Blank or unknown codes are treated as Southampton.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Port {
    #[default]
    Southampton,
    Cherbourg,
    Queenstown,
}

impl Port {
    /// Parses the single-letter code used in passenger files (`S`, `C`, `Q`).
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "C" => Port::Cherbourg,
            "Q" => Port::Queenstown,
            _ => Port::Southampton,
        }
    }

    /// Numeric encoding used in the feature vector.
    pub fn code(self) -> f64 {
        match self {
            Port::Southampton => 0.0,
            Port::Cherbourg => 1.0,
            Port::Queenstown => 2.0,
        }
    }
}

/// A single passenger observation.
///
/// `survived` is `Some` for training records and `None` when the source file
/// has no label column. Numeric fields that were missing or unparsable in the
/// source are `0` (see [`loader`]).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Passenger {
    pub passenger_id: u32,
    pub survived: Option<bool>,
    pub pclass: u32,
    pub name: String,
    pub sex: String,
    pub age: f64,
    pub sib_sp: u32,
    pub parch: u32,
    pub ticket: String,
    pub fare: f64,
    pub cabin: String,
    pub embarked: Port,
}

impl Passenger {
    /// Label as a regression target (`1.0` survived, `0.0` did not).
    pub fn target(&self) -> Option<f64> {
        self.survived.map(|s| if s { 1.0 } else { 0.0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_from_code() {
        assert_eq!(Port::from_code("S"), Port::Southampton);
        assert_eq!(Port::from_code("C"), Port::Cherbourg);
        assert_eq!(Port::from_code("Q"), Port::Queenstown);
        assert_eq!(Port::from_code(""), Port::Southampton);
        assert_eq!(Port::from_code("X"), Port::Southampton);
        assert_eq!(Port::from_code(" C "), Port::Cherbourg);
    }

    #[test]
    fn test_port_code() {
        assert_eq!(Port::Southampton.code(), 0.0);
        assert_eq!(Port::Cherbourg.code(), 1.0);
        assert_eq!(Port::Queenstown.code(), 2.0);
        assert_eq!(Port::default().code(), 0.0);
    }

    #[test]
    fn test_passenger_target() {
        let mut p = Passenger::default();
        assert_eq!(p.target(), None);
        p.survived = Some(true);
        assert_eq!(p.target(), Some(1.0));
        p.survived = Some(false);
        assert_eq!(p.target(), Some(0.0));
    }
}
