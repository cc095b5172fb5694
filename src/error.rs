use thiserror::Error;

/// Invalid arguments to the element-wise variance.
///
/// All variants are raised before any element is processed. Invalid λ
/// values are never errors; they become the NaN marker in the output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VarianceError {
    /// An `accessor` option was supplied that cannot be called.
    #[error("accessor option must be a function")]
    AccessorNotCallable,

    /// The requested `dtype` is not a supported precision.
    #[error("unrecognized/unsupported dtype `{0}`")]
    UnknownDType(String),

    /// An option has the wrong type.
    #[error("`{option}` option must be {expected}")]
    InvalidOption {
        option: &'static str,
        expected: &'static str,
    },

    /// The options argument is not an object.
    #[error("options argument must be an object")]
    OptionsNotObject,
}
