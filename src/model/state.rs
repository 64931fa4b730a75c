/// A marker type indicating that a model is **not yet trained**.
///
/// Training methods (`forward`, `backward`, `update_params`) exist only on
/// `LogisticModel<Unfitted>`; prediction is unavailable until
/// [`into_fitted`](super::TrainableModel::into_fitted) is called.
#[derive(Clone, Copy, Debug)]
pub struct Unfitted;

/// A marker type indicating that a model has been **fully trained**.
///
/// A `Fitted` model holds only its [`WeightVector`](super::WeightVector): no
/// optimizer state, loss function, or training hyperparameters.
#[derive(Clone, Copy, Debug)]
pub struct Fitted;
