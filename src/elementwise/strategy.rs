use serde_json::{Number, Value};

use crate::path::DeepPath;

use super::options::Accessor;

/// How λ is read from, and the result written back to, one sequence element.
///
/// Chosen once per call; the element loop is shared by every strategy.
pub(crate) trait Extract {
    /// λ for `element` at `index`. Unreadable values yield NaN.
    fn extract(&self, element: &Value, index: usize) -> f64;

    /// Store `result` into `element`.
    fn write(&self, element: &mut Value, result: f64);

    /// Whether results must always land in the input records.
    fn always_in_place(&self) -> bool {
        false
    }
}

/// Each element is λ itself.
pub(crate) struct Raw;

impl Extract for Raw {
    fn extract(&self, element: &Value, _index: usize) -> f64 {
        lambda_of(element)
    }

    fn write(&self, element: &mut Value, result: f64) {
        *element = to_value(result);
    }
}

/// λ comes from a caller-supplied function; results replace the element.
pub(crate) struct ByAccessor<'o>(pub(crate) &'o Accessor);

impl Extract for ByAccessor<'_> {
    fn extract(&self, element: &Value, index: usize) -> f64 {
        (self.0)(element, index)
    }

    fn write(&self, element: &mut Value, result: f64) {
        *element = to_value(result);
    }
}

/// λ lives at a deep field; results are written back to that field.
pub(crate) struct ByPath(pub(crate) DeepPath);

impl Extract for ByPath {
    fn extract(&self, element: &Value, _index: usize) -> f64 {
        self.0.get(element).map_or(f64::NAN, lambda_of)
    }

    fn write(&self, element: &mut Value, result: f64) {
        self.0.set(element, to_value(result));
    }

    fn always_in_place(&self) -> bool {
        true
    }
}

/// Read a JSON number as λ; anything else is NaN.
pub(crate) fn lambda_of(value: &Value) -> f64 {
    value.as_f64().unwrap_or(f64::NAN)
}

/// Encode a result as JSON. NaN has no JSON form and becomes `null`.
pub(crate) fn to_value(result: f64) -> Value {
    Number::from_f64(result).map_or(Value::Null, Value::Number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn raw_reads_numbers_only() {
        assert_eq!(Raw.extract(&json!(3), 0), 3.0);
        assert_eq!(Raw.extract(&json!(2.5), 0), 2.5);
        assert!(Raw.extract(&json!("3"), 0).is_nan());
        assert!(Raw.extract(&json!(null), 0).is_nan());
        assert!(Raw.extract(&json!({ "x": 1 }), 0).is_nan());
    }

    #[test]
    fn nan_encodes_as_null() {
        assert_eq!(to_value(f64::NAN), Value::Null);
        assert_eq!(to_value(f64::INFINITY), Value::Null);
        assert_eq!(to_value(2.0).as_f64(), Some(2.0));
    }

    #[test]
    fn accessor_receives_index() {
        let f: Accessor = Box::new(|_: &Value, i: usize| i as f64 * 10.0);
        let s = ByAccessor(&f);
        assert_eq!(s.extract(&json!(null), 3), 30.0);
        assert!(!s.always_in_place());
    }

    #[test]
    fn path_reads_and_writes_nested_field() {
        let s = ByPath(DeepPath::new("x.1", "."));
        let mut record = json!({ "x": [9, 4] });
        assert_eq!(s.extract(&record, 0), 4.0);
        s.write(&mut record, 7.0);
        assert_eq!(record["x"][1].as_f64(), Some(7.0));
        assert!(s.always_in_place());
    }

    #[test]
    fn path_missing_field_is_nan() {
        let s = ByPath(DeepPath::new("y", "."));
        assert!(s.extract(&json!({ "x": 1 }), 0).is_nan());
    }
}
