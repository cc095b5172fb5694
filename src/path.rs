//! Deep field access into nested JSON records.
//!
//! A [`DeepPath`] is a delimited key path such as `x.1` or `a/b/c`. Each
//! segment indexes an object by key or an array by position.

use serde_json::Value;

/// Parsed key path into a nested [`Value`].
///
/// # Example
///
/// ```
/// use poisson_variance::DeepPath;
/// use serde_json::json;
///
/// let mut record = json!({ "x": [9, 2] });
/// let path = DeepPath::new("x/1", "/");
/// assert_eq!(path.get(&record), Some(&json!(2)));
///
/// assert!(path.set(&mut record, json!(5)));
/// assert_eq!(record, json!({ "x": [9, 5] }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepPath {
    segments: Vec<String>,
}

impl DeepPath {
    /// Split `path` on `sep`. An empty separator yields a single segment.
    pub fn new(path: &str, sep: &str) -> Self {
        let segments = if sep.is_empty() {
            vec![path.to_owned()]
        } else {
            path.split(sep).map(str::to_owned).collect()
        };
        Self { segments }
    }

    /// Resolve the path, returning the nested field if every segment exists.
    pub fn get<'v>(&self, root: &'v Value) -> Option<&'v Value> {
        self.segments
            .iter()
            .try_fold(root, |node, key| child(node, key))
    }

    /// Write `value` at the path, returning whether the write happened.
    ///
    /// Intermediate containers must already exist. The last segment may name
    /// a new key on an object; on an array it must be an existing index.
    pub fn set(&self, root: &mut Value, value: Value) -> bool {
        let Some((last, parents)) = self.segments.split_last() else {
            return false;
        };
        let parent = parents
            .iter()
            .try_fold(root, |node, key| child_mut(node, key));
        match parent {
            Some(Value::Object(map)) => {
                map.insert(last.clone(), value);
                true
            }
            Some(Value::Array(items)) => match index(last).and_then(|i| items.get_mut(i)) {
                Some(slot) => {
                    *slot = value;
                    true
                }
                None => false,
            },
            _ => false,
        }
    }
}

fn index(key: &str) -> Option<usize> {
    key.parse().ok()
}

fn child<'v>(node: &'v Value, key: &str) -> Option<&'v Value> {
    match node {
        Value::Object(map) => map.get(key),
        Value::Array(items) => items.get(index(key)?),
        _ => None,
    }
}

fn child_mut<'v>(node: &'v mut Value, key: &str) -> Option<&'v mut Value> {
    match node {
        Value::Object(map) => map.get_mut(key),
        Value::Array(items) => items.get_mut(index(key)?),
        _ => None,
    }
}
