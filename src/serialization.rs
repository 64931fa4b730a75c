//! Persistence of fitted parameters.
//!
//! - [`WeightStore`] reads and writes the weight vector in its wire format:
//!   one CSV record of exactly [`N_FEATURES`] decimal numbers, no header.
//! - [`SerializableParams`] turns plain parameter structs (e.g. scaler
//!   statistics) into bytes via `bincode`.

use crate::error::{Result, TitanicError};
use crate::features::N_FEATURES;
use crate::model::WeightVector;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use tracing::info;

/// A trait for parameter representations that can be serialized to and from bytes.
///
/// Implementors should contain only plain numerical data (e.g. `Vec<f64>`).
pub trait SerializableParams: Sized {
    /// Serialize the parameters into a byte buffer.
    fn to_bytes(&self) -> Result<Vec<u8>>;

    /// Deserialize the parameters from a byte buffer.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
}

impl<T> SerializableParams for T
where
    T: serde::Serialize + for<'de> serde::Deserialize<'de>,
{
    fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// Reads and writes [`WeightVector`]s.
///
/// Values are written with the shortest representation that parses back to
/// the same `f64`, so save/load cycles are lossless.
pub struct WeightStore;

impl WeightStore {
    pub fn save<W: Write>(weights: &WeightVector, writer: W) -> Result<()> {
        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
        wtr.write_record(weights.iter().map(|w| w.to_string()))?;
        wtr.flush()?;
        Ok(())
    }

    pub fn load<R: Read>(reader: R) -> Result<WeightVector> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let record = match rdr.records().next() {
            Some(record) => record?,
            None => return Err(TitanicError::EmptyData("weight file has no record".into())),
        };

        let values = record
            .iter()
            .enumerate()
            .map(|(i, field)| {
                field.parse::<f64>().map_err(|_| {
                    TitanicError::InvalidFormat(format!("weight {} is not a number: {:?}", i, field))
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        WeightVector::try_from(values)
    }

    /// Persisted form as a string (no trailing newline).
    pub fn to_string(weights: &WeightVector) -> Result<String> {
        let mut buf = Vec::new();
        Self::save(weights, &mut buf)?;
        let text = String::from_utf8(buf).map_err(|e| TitanicError::Serialization(e.to_string()))?;
        Ok(text.trim_end().to_string())
    }

    pub fn from_str(text: &str) -> Result<WeightVector> {
        Self::load(text.as_bytes())
    }

    pub fn save_to_file<P: AsRef<Path>>(weights: &WeightVector, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        Self::save(weights, File::create(path)?)?;
        info!(path = %path.display(), n_weights = N_FEATURES, "saved weights");
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WeightVector> {
        let path = path.as_ref();
        let weights = Self::load(BufReader::new(File::open(path)?))?;
        info!(path = %path.display(), "loaded weights");
        Ok(weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WeightVector {
        WeightVector::new([
            0.1,
            -2.5,
            3.141592653589793,
            1e-9,
            -0.000001,
            42.0,
            0.0,
            -7.25,
            1.0 / 3.0,
            123456.789,
        ])
    }

    #[test]
    fn test_roundtrip_is_lossless() {
        let weights = sample();
        let text = WeightStore::to_string(&weights).unwrap();
        let loaded = WeightStore::from_str(&text).unwrap();
        assert_eq!(loaded, weights);
    }

    #[test]
    fn test_repeated_roundtrips_do_not_drift() {
        let mut weights = sample();
        for _ in 0..5 {
            let text = WeightStore::to_string(&weights).unwrap();
            weights = WeightStore::from_str(&text).unwrap();
        }
        assert_eq!(weights, sample());
    }

    #[test]
    fn test_format_is_single_headerless_record() {
        let text = WeightStore::to_string(&WeightVector::zeros()).unwrap();
        assert_eq!(text, "0,0,0,0,0,0,0,0,0,0");
        assert!(!text.contains('\n'));
    }

    #[test]
    fn test_load_six_decimal_reference_format() {
        let text = "-0.123456,1.000000,2.500000,0.000001,0.000000,0.000000,-3.000000,0.500000,0.250000,0.125000\n";
        let weights = WeightStore::from_str(text).unwrap();
        assert_eq!(weights[0], -0.123456);
        assert_eq!(weights[9], 0.125);
    }

    #[test]
    fn test_wrong_length_is_hard_error() {
        let err = WeightStore::from_str("1,2,3\n").unwrap_err();
        assert!(matches!(
            err,
            TitanicError::FeatureMismatch {
                expected_features: 10,
                got_features: 3
            }
        ));

        let eleven = vec!["0"; 11].join(",");
        let err = WeightStore::from_str(&eleven).unwrap_err();
        assert!(matches!(
            err,
            TitanicError::FeatureMismatch {
                got_features: 11,
                ..
            }
        ));
    }

    #[test]
    fn test_unparsable_weight_is_error() {
        let err = WeightStore::from_str("1,2,3,4,5,six,7,8,9,10").unwrap_err();
        assert!(matches!(err, TitanicError::InvalidFormat(_)));
    }

    #[test]
    fn test_empty_input_is_error() {
        let err = WeightStore::from_str("").unwrap_err();
        assert!(matches!(err, TitanicError::EmptyData(_)));
    }

    #[test]
    fn test_file_roundtrip() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let path = tmp.path().join("model").join("weights.csv");
        WeightStore::save_to_file(&sample(), &path)?;
        let loaded = WeightStore::load_from_file(&path)?;
        assert_eq!(loaded, sample());
        Ok(())
    }

    #[test]
    fn test_load_from_missing_file_is_io_error() {
        let err = WeightStore::load_from_file("/no/such/weights.csv").unwrap_err();
        assert!(matches!(err, TitanicError::Io(_)));
    }

    #[test]
    fn test_serializable_params_roundtrip() -> Result<()> {
        let params: Vec<f64> = vec![0.5, -1.25, 3.0];
        let bytes = params.to_bytes()?;
        let restored = Vec::<f64>::from_bytes(&bytes)?;
        assert_eq!(restored, params);
        Ok(())
    }
}
