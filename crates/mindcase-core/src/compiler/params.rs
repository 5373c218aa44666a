//! Parameterized test-case templates.
//!
//! A case topic whose comment is a JSON object of parameter name to candidate
//! values is expanded into one case per combination:
//!
//! ```text
//! title:   "Pay with {method} in {currency}"
//! comment: {"method": ["card", "wallet"], "currency": ["EUR", "USD"]}
//! ```
//!
//! yields four titles, the first parameter varying slowest.

use regex::{Captures, Regex};
use serde_json::{Map, Value};
use std::sync::LazyLock;

/// `{name}` placeholder in a title template.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").unwrap());

/// Parameter names with their candidate values, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    names: Vec<String>,
    values: Vec<Vec<Value>>,
}

/// One assignment of a value to every parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding<'a> {
    pairs: Vec<(&'a str, &'a Value)>,
}

impl Binding<'_> {
    /// Value bound to `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.pairs
            .iter()
            .find(|(bound, _)| *bound == name)
            .map(|(_, value)| *value)
    }
}

/// Parse a topic comment as a parameter specification.
///
/// Returns `None` when the comment is absent, blank, not JSON, not an object,
/// an empty object, or has a value that is not a non-empty array. Such
/// comments are ordinary summaries.
pub fn parameter_spec(comment: Option<&str>) -> Option<ParameterSpec> {
    let comment = comment.map(str::trim).filter(|text| !text.is_empty())?;
    let object: Map<String, Value> = match serde_json::from_str(comment) {
        Ok(object) => object,
        Err(e) => {
            tracing::debug!("comment is not a parameter spec: {e}");
            return None;
        },
    };
    if object.is_empty() {
        return None;
    }

    let mut names = Vec::with_capacity(object.len());
    let mut values = Vec::with_capacity(object.len());
    for (name, candidates) in object {
        match candidates {
            Value::Array(candidates) if !candidates.is_empty() => {
                names.push(name);
                values.push(candidates);
            },
            other => {
                tracing::debug!("parameter '{name}' has no candidate list: {other}");
                return None;
            },
        }
    }

    Some(ParameterSpec { names, values })
}

impl ParameterSpec {
    /// Number of combinations the spec expands to, or `None` if it does not
    /// fit in a `usize`.
    pub fn combination_count(&self) -> Option<usize> {
        self.values
            .iter()
            .try_fold(1_usize, |count, candidates| count.checked_mul(candidates.len()))
    }

    /// Iterate the Cartesian product of all candidate lists.
    pub fn combinations(&self) -> Combinations<'_> {
        Combinations {
            spec: self,
            indices: vec![0; self.values.len()],
            done: false,
        }
    }
}

/// Iterator over every [`Binding`] of a [`ParameterSpec`].
#[derive(Debug)]
pub struct Combinations<'a> {
    spec: &'a ParameterSpec,
    indices: Vec<usize>,
    done: bool,
}

impl<'a> Iterator for Combinations<'a> {
    type Item = Binding<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let spec = self.spec;
        let pairs = spec
            .names
            .iter()
            .zip(&spec.values)
            .zip(&self.indices)
            .map(|((name, candidates), &index)| (name.as_str(), &candidates[index]))
            .collect();

        // Advance like an odometer, last parameter fastest
        self.done = true;
        for position in (0..self.indices.len()).rev() {
            self.indices[position] += 1;
            if self.indices[position] < spec.values[position].len() {
                self.done = false;
                break;
            }
            self.indices[position] = 0;
        }

        Some(Binding { pairs })
    }
}

/// Substitute `{name}` placeholders in a title template.
///
/// Strings are inserted without quotes, other values in their JSON spelling.
/// Placeholders without a binding are left as written.
pub fn render_title(template: &str, binding: &Binding<'_>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            binding.get(&caps[1]).map_or_else(
                || caps[0].to_string(),
                |value| match value {
                    Value::String(text) => text.clone(),
                    other => other.to_string(),
                },
            )
        })
        .into_owned()
}
