use thiserror::Error;

#[derive(Error, Debug)]
pub enum GoatherdError {
    #[error("Eccentricity must be greater than zero (got {0})")]
    NonPositiveEccentricity(f64),

    #[error("Eccentricity must be less than unity (got {0})")]
    EccentricityAboveUnity(f64),

    #[error("Mean anomaly should be in the range (0, 2 pi) (got {0})")]
    MeanAnomalyOutOfRange(f64),

    #[error("Need at least two sampling points (got {0})")]
    NotEnoughSamplingPoints(usize),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),
}

impl PartialEq for GoatherdError {
    fn eq(&self, other: &Self) -> bool {
        use GoatherdError::*;
        match (self, other) {
            (NonPositiveEccentricity(a), NonPositiveEccentricity(b)) => a == b,
            (EccentricityAboveUnity(a), EccentricityAboveUnity(b)) => a == b,
            (MeanAnomalyOutOfRange(a), MeanAnomalyOutOfRange(b)) => a == b,
            (NotEnoughSamplingPoints(a), NotEnoughSamplingPoints(b)) => a == b,

            // Not comparable beyond the variant itself
            (IoError(_), IoError(_)) => true,

            _ => false,
        }
    }
}
