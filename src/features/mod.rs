//! Feature extraction: one [`Passenger`] in, one fixed-length [`FeatureVector`] out.
//!
//! Layout of every vector (must match the weight order):
//!
//! ```text
//! [intercept, pclass, sex, age, sib_sp, parch, fare, embarked, cabin_known, title]
//! ```

use crate::dataset::Passenger;
use crate::error::{Result, TitanicError};
use std::ops::Index;
use tracing::warn;

pub mod title;
pub use self::title::{title_code, HONORIFICS};

/// Number of entries in every feature and weight vector.
pub const N_FEATURES: usize = 10;

/// Column names, in vector order.
pub const FEATURE_NAMES: [&str; N_FEATURES] = [
    "intercept",
    "pclass",
    "sex",
    "age",
    "sib_sp",
    "parch",
    "fare",
    "embarked",
    "cabin_known",
    "title",
];

/// Fixed-length numeric encoding of a passenger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureVector([f64; N_FEATURES]);

impl FeatureVector {
    pub fn new(values: [f64; N_FEATURES]) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn to_array(self) -> [f64; N_FEATURES] {
        self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        N_FEATURES
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Index<usize> for FeatureVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl From<[f64; N_FEATURES]> for FeatureVector {
    fn from(values: [f64; N_FEATURES]) -> Self {
        Self(values)
    }
}

impl TryFrom<&[f64]> for FeatureVector {
    type Error = TitanicError;

    fn try_from(values: &[f64]) -> Result<Self> {
        let array: [f64; N_FEATURES] =
            values
                .try_into()
                .map_err(|_| TitanicError::FeatureMismatch {
                    expected_features: N_FEATURES,
                    got_features: values.len(),
                })?;
        Ok(Self(array))
    }
}

/// Converts raw passenger records into feature vectors.
///
/// Pure apart from a `warn!` when a name carries no known honorific; the
/// title feature is `0.0` in that case.
#[derive(Clone, Copy, Debug, Default)]
pub struct FeatureExtractor;

impl FeatureExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, passenger: &Passenger) -> FeatureVector {
        let sex = if passenger.sex == "female" { 1.0 } else { 0.0 };
        let cabin_known = if passenger.cabin.is_empty() { 0.0 } else { 1.0 };
        let title = match title_code(&passenger.name) {
            Some(code) => f64::from(code),
            None => {
                warn!(
                    passenger_id = passenger.passenger_id,
                    name = %passenger.name,
                    "unrecognized honorific, title feature set to 0"
                );
                0.0
            }
        };

        FeatureVector([
            1.0,
            f64::from(passenger.pclass),
            sex,
            passenger.age,
            f64::from(passenger.sib_sp),
            f64::from(passenger.parch),
            passenger.fare,
            passenger.embarked.code(),
            cabin_known,
            title,
        ])
    }

    pub fn extract_all(&self, passengers: &[Passenger]) -> Vec<FeatureVector> {
        passengers.iter().map(|p| self.extract(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Port;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    fn passenger() -> Passenger {
        Passenger {
            passenger_id: 2,
            survived: Some(true),
            pclass: 1,
            name: "Cumings, Mrs. John Bradley (Florence Briggs Thayer)".to_string(),
            sex: "female".to_string(),
            age: 38.0,
            sib_sp: 1,
            parch: 0,
            ticket: "PC 17599".to_string(),
            fare: 71.2833,
            cabin: "C85".to_string(),
            embarked: Port::Cherbourg,
        }
    }

    #[test]
    fn test_extract_full_record() {
        let v = FeatureExtractor::new().extract(&passenger());
        assert_eq!(
            v.to_array(),
            [1.0, 1.0, 1.0, 38.0, 1.0, 0.0, 71.2833, 1.0, 1.0, 2.0]
        );
    }

    #[test]
    fn test_extract_defaults() {
        let v = FeatureExtractor::new().extract(&Passenger::default());
        assert_eq!(v.len(), N_FEATURES);
        assert_eq!(v[0], 1.0);
        assert!(v.iter().skip(1).all(|&x| x == 0.0));
    }

    #[test]
    fn test_sex_indicator() {
        let extractor = FeatureExtractor::new();
        for (sex, expected) in [("female", 1.0), ("male", 0.0), ("Female", 0.0), ("", 0.0)] {
            let p = Passenger {
                sex: sex.to_string(),
                ..Passenger::default()
            };
            assert_eq!(extractor.extract(&p)[2], expected, "sex = {:?}", sex);
        }
    }

    #[test]
    fn test_embarked_code() {
        let extractor = FeatureExtractor::new();
        for (code, expected) in [("S", 0.0), ("C", 1.0), ("Q", 2.0), ("", 0.0)] {
            let p = Passenger {
                embarked: Port::from_code(code),
                ..Passenger::default()
            };
            assert_eq!(extractor.extract(&p)[7], expected, "embarked = {:?}", code);
        }
    }

    #[test]
    fn test_cabin_known() {
        let extractor = FeatureExtractor::new();
        let mut p = Passenger::default();
        assert_eq!(extractor.extract(&p)[8], 0.0);
        p.cabin = "B28".to_string();
        assert_eq!(extractor.extract(&p)[8], 1.0);
    }

    #[test]
    fn test_title_precedence_mrs() {
        let p = Passenger {
            name: "Mrs. John Smith".to_string(),
            ..Passenger::default()
        };
        assert_eq!(FeatureExtractor::new().extract(&p)[9], 2.0);
    }

    #[test]
    fn test_extract_all_preserves_order() {
        let mut second = passenger();
        second.pclass = 3;
        let rows = FeatureExtractor::new().extract_all(&[passenger(), second]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][1], 1.0);
        assert_eq!(rows[1][1], 3.0);
    }

    #[test]
    fn test_feature_vector_try_from_slice() {
        let ok = FeatureVector::try_from(&[0.5; N_FEATURES][..]).unwrap();
        assert_eq!(ok[9], 0.5);

        let err = FeatureVector::try_from(&[0.5; 3][..]).unwrap_err();
        assert!(matches!(
            err,
            TitanicError::FeatureMismatch {
                expected_features: 10,
                got_features: 3
            }
        ));
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn extract_logged(p: &Passenger) -> (FeatureVector, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let v = tracing::subscriber::with_default(subscriber, || FeatureExtractor::new().extract(p));
        (v, logs.text())
    }

    #[test]
    fn test_unknown_honorific_warns_and_codes_zero() {
        let mut p = passenger();
        p.passenger_id = 77;
        p.name = "Nobody, Herr Otto".to_string();

        let (v, logs) = extract_logged(&p);
        assert_eq!(v[9], 0.0);
        assert!(logs.contains("WARN"), "logs: {}", logs);
        assert!(logs.contains("unrecognized honorific"));
        assert!(logs.contains("Nobody, Herr Otto"));
        assert!(logs.contains("77"));
    }

    #[test]
    fn test_known_honorific_is_silent() {
        let (v, logs) = extract_logged(&passenger());
        assert_eq!(v[9], 2.0);
        assert!(!logs.contains("unrecognized honorific"));
    }
}
