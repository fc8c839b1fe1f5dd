use crate::domain::call::Value;
use crate::domain::ports::ArgumentValidator;

/// Structural equality against an expected value.
///
/// Numbers compare by numeric value, so `1` matches `1.0`, including inside arrays and
/// objects. Booleans never equal numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Equals {
    expected: Value,
}

impl Equals {
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl ArgumentValidator for Equals {
    fn matches(&self, actual: &Value) -> bool {
        values_equal(actual, &self.expected)
    }

    fn describe(&self) -> String {
        self.expected.to_string()
    }
}

fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            if let (Some(x), Some(y)) = (x.as_i64(), y.as_i64()) {
                return x == y;
            }
            if let (Some(x), Some(y)) = (x.as_u64(), y.as_u64()) {
                return x == y;
            }
            match (x.as_f64(), y.as_f64()) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            }
        }
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| values_equal(x, y)))
        }
        _ => a == b,
    }
}
