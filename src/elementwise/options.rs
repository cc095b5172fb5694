use core::fmt;

use serde_json::Value;

use crate::dtype::DType;
use crate::error::VarianceError;

/// Caller-supplied extraction of λ from a sequence element.
pub type Accessor = Box<dyn Fn(&Value, usize) -> f64>;

/// Requested output precision, resolved when the call starts.
#[derive(Debug, Clone, PartialEq)]
enum DTypeRequest {
    Tag(DType),
    Name(String),
}

/// Options for [`apply`](super::apply).
///
/// | Option | Default | Meaning |
/// |--------|---------|---------|
/// | `accessor` | none | extract λ from each sequence element; wins over `path` |
/// | `dtype` | none | output precision for sequences, typed buffers and matrices |
/// | `copy` | `true` | allocate a new output; `false` mutates the input when possible |
/// | `path` | none | deep field holding λ in each record; always mutates in place |
/// | `sep` | `"."` | `path` separator |
///
/// # Example
///
/// ```
/// use poisson_variance::{DType, Options};
///
/// let opts = Options::new().dtype(DType::Int32).copy(false);
/// assert!(!opts.is_copy());
/// ```
pub struct Options {
    accessor: Option<Accessor>,
    dtype: Option<DTypeRequest>,
    copy: bool,
    path: Option<String>,
    sep: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            accessor: None,
            dtype: None,
            copy: true,
            path: None,
            sep: ".".to_owned(),
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("accessor", &self.accessor.as_ref().map(|_| "<fn>"))
            .field("dtype", &self.dtype)
            .field("copy", &self.copy)
            .field("path", &self.path)
            .field("sep", &self.sep)
            .finish()
    }
}

// ── Builder ─────────────────────────────────────────────────────────

impl Options {
    /// All defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract λ from each sequence element with `f(element, index)`.
    pub fn accessor<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value, usize) -> f64 + 'static,
    {
        self.accessor = Some(Box::new(f));
        self
    }

    /// Request an output precision.
    pub fn dtype(mut self, dtype: DType) -> Self {
        self.dtype = Some(DTypeRequest::Tag(dtype));
        self
    }

    /// Request an output precision by name.
    ///
    /// The name is checked when the call starts; unknown names fail the
    /// call with [`VarianceError::UnknownDType`].
    pub fn dtype_name(mut self, name: impl Into<String>) -> Self {
        self.dtype = Some(DTypeRequest::Name(name.into()));
        self
    }

    /// Allocate a new output (`true`, default) or mutate the input.
    pub fn copy(mut self, copy: bool) -> Self {
        self.copy = copy;
        self
    }

    /// Deep field path holding λ in each record. An empty path is ignored.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.path = (!path.is_empty()).then_some(path);
        self
    }

    /// Separator for [`path`](Self::path).
    pub fn sep(mut self, sep: impl Into<String>) -> Self {
        self.sep = sep.into();
        self
    }
}

// ── JSON configuration ──────────────────────────────────────────────

impl Options {
    /// Build options from a JSON configuration object.
    ///
    /// Recognized keys are `accessor`, `dtype`, `copy`, `path` and `sep`;
    /// other keys are ignored. A function cannot be expressed in JSON, so any
    /// `accessor` key is rejected. The `dtype` name is only checked once a
    /// container input needs it.
    ///
    /// ```
    /// use poisson_variance::{Options, VarianceError};
    /// use serde_json::json;
    ///
    /// let opts = Options::from_value(&json!({ "path": "x/1", "sep": "/" })).unwrap();
    /// assert_eq!(opts.path_str(), Some("x/1"));
    ///
    /// let err = Options::from_value(&json!({ "accessor": "lambda" })).unwrap_err();
    /// assert_eq!(err, VarianceError::AccessorNotCallable);
    /// ```
    pub fn from_value(config: &Value) -> Result<Self, VarianceError> {
        let map = config.as_object().ok_or(VarianceError::OptionsNotObject)?;
        let mut opts = Options::default();

        if map.contains_key("accessor") {
            return Err(VarianceError::AccessorNotCallable);
        }
        if let Some(copy) = map.get("copy") {
            opts.copy = copy.as_bool().ok_or(VarianceError::InvalidOption {
                option: "copy",
                expected: "a boolean",
            })?;
        }
        if let Some(path) = map.get("path") {
            let path = path.as_str().ok_or(VarianceError::InvalidOption {
                option: "path",
                expected: "a string",
            })?;
            opts = opts.path(path);
        }
        if let Some(sep) = map.get("sep") {
            let sep = sep.as_str().ok_or(VarianceError::InvalidOption {
                option: "sep",
                expected: "a string",
            })?;
            opts = opts.sep(sep);
        }
        if let Some(dtype) = map.get("dtype") {
            let name = dtype.as_str().ok_or(VarianceError::InvalidOption {
                option: "dtype",
                expected: "a string",
            })?;
            opts = opts.dtype_name(name);
        }
        Ok(opts)
    }
}

// ── Accessors ───────────────────────────────────────────────────────

impl Options {
    /// Whether a new output is allocated.
    pub fn is_copy(&self) -> bool {
        self.copy
    }

    /// Configured deep path, if any.
    pub fn path_str(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Path separator.
    pub fn sep_str(&self) -> &str {
        &self.sep
    }

    pub(crate) fn accessor_fn(&self) -> Option<&Accessor> {
        self.accessor.as_ref()
    }

    /// Resolve the requested output precision.
    pub fn resolve_dtype(&self) -> Result<Option<DType>, VarianceError> {
        match &self.dtype {
            None => Ok(None),
            Some(DTypeRequest::Tag(dtype)) => Ok(Some(*dtype)),
            Some(DTypeRequest::Name(name)) => name.parse().map(Some),
        }
    }
}
