//! Titanic survival CLI
//!
//! Trains the logistic-regression classifier on a labeled passenger CSV and
//! predicts survival for new passengers from a saved weight file.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use titanic_survival::dataset::{load_passengers, write_predictions, write_predictions_to_file};
use titanic_survival::preprocessing::FittedTransformer;
use titanic_survival::{
    ClassificationMetrics, FittedNormalizer, NormalizationMode, Passenger, Predictor,
    TrainingConfig, WeightStore,
};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "titanic")]
#[command(about = "Titanic survival prediction with logistic regression", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Train on a labeled CSV and save the weights
    Train {
        /// Labeled passenger CSV (with a Survived column)
        #[arg(short, long)]
        data: PathBuf,

        /// Where to write the weight file
        #[arg(short, long, default_value = "weights.csv")]
        weights: PathBuf,

        /// JSON training configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Gradient-descent step size (overrides the config file)
        #[arg(long)]
        learning_rate: Option<f64>,

        /// Number of iterations (overrides the config file)
        #[arg(long)]
        iterations: Option<usize>,

        /// per_row, standard or elementwise (overrides the config file)
        #[arg(long)]
        normalization: Option<NormalizationMode>,

        /// Scaler sidecar path for standard normalization
        #[arg(long)]
        scaler: Option<PathBuf>,
    },

    /// Predict survival with saved weights
    Predict {
        /// Passenger CSV, labeled or unlabeled
        #[arg(short, long)]
        data: PathBuf,

        /// Weight file produced by `train`
        #[arg(short, long, default_value = "weights.csv")]
        weights: PathBuf,

        /// Normalization the weights were trained with
        #[arg(long, default_value = "per_row")]
        normalization: NormalizationMode,

        /// Scaler sidecar path for standard normalization
        #[arg(long)]
        scaler: Option<PathBuf>,

        /// Prediction CSV output; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn scaler_path(weights: &Path, explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| weights.with_extension("scaler.bin"))
}

fn labels(passengers: &[Passenger]) -> Option<Vec<bool>> {
    passengers.iter().map(|p| p.survived).collect()
}

/// Accuracy summary for labeled input, written to stderr so that stdout can
/// carry the prediction CSV.
fn report(passengers: &[Passenger], predictions: &[(u32, bool)]) {
    let Some(actual) = labels(passengers) else {
        return;
    };
    let predicted: Vec<bool> = predictions.iter().map(|&(_, survived)| survived).collect();
    let metrics = ClassificationMetrics::from_predictions(&predicted, &actual);

    eprintln!("Model accuracy: {:.2}", metrics.accuracy());
    eprintln!("{}", metrics);
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Train {
            data,
            weights,
            config,
            learning_rate,
            iterations,
            normalization,
            scaler,
        } => {
            let mut cfg = match &config {
                Some(path) => TrainingConfig::load_from_file(path)
                    .with_context(|| format!("failed to load config {}", path.display()))?,
                None => TrainingConfig::default(),
            };
            if let Some(lr) = learning_rate {
                cfg.learning_rate = lr;
            }
            if let Some(n) = iterations {
                cfg.max_iterations = n;
            }
            if let Some(mode) = normalization {
                cfg.normalization = mode;
            }
            let trainer = cfg.trainer().context("invalid training configuration")?;

            let passengers = load_passengers(&data)
                .with_context(|| format!("failed to read {}", data.display()))?;
            if labels(&passengers).is_none() {
                bail!("{} has no Survived column or a record is unlabeled", data.display());
            }

            let result = trainer.fit(&passengers).context("training failed")?;
            if let Some(loss) = result.final_loss() {
                info!(iterations = result.iterations, loss, "model trained");
            }

            WeightStore::save_to_file(&result.weights(), &weights)
                .with_context(|| format!("failed to write {}", weights.display()))?;
            if cfg.normalization == NormalizationMode::Standard {
                let path = scaler_path(&weights, scaler);
                result
                    .predictor
                    .normalizer()
                    .save_to_file(&path)
                    .with_context(|| format!("failed to write scaler {}", path.display()))?;
                info!(path = %path.display(), "scaler saved");
            }

            report(&passengers, &result.predictor.predict_batch(&passengers));
        }

        Commands::Predict {
            data,
            weights,
            normalization,
            scaler,
            output,
        } => {
            let w = WeightStore::load_from_file(&weights)
                .with_context(|| format!("failed to load weights {}", weights.display()))?;
            let normalizer = match normalization {
                NormalizationMode::PerRow => FittedNormalizer::per_row(),
                NormalizationMode::Elementwise => FittedNormalizer::elementwise(),
                NormalizationMode::Standard => {
                    let path = scaler_path(&weights, scaler);
                    FittedNormalizer::load_from_file(&path)
                        .with_context(|| format!("failed to load scaler {}", path.display()))?
                }
            };
            if normalizer.mode() != normalization {
                warn!(
                    requested = %normalization,
                    loaded = %normalizer.mode(),
                    "scaler file holds a different normalization"
                );
            }
            let predictor = Predictor::new(w, normalizer);

            let passengers = load_passengers(&data)
                .with_context(|| format!("failed to read {}", data.display()))?;
            let predictions = predictor.predict_batch(&passengers);
            info!(count = predictions.len(), "predictions computed");

            match &output {
                Some(path) => write_predictions_to_file(path, &predictions)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => write_predictions(std::io::stdout().lock(), &predictions)?,
            }

            report(&passengers, &predictions);
        }
    }

    Ok(())
}
