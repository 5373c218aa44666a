//! Mind-map topic tree as handed over by the document reader.
//!
//! Topics deserialize from the dictionary shape produced by mind-map readers:
//!
//! ```json
//! {
//!   "title": "Login",
//!   "note": "account exists",
//!   "comment": null,
//!   "labels": ["auto"],
//!   "markers": ["priority-1"],
//!   "topics": []
//! }
//! ```
//!
//! `markers` distinguishes "absent" from "empty": a missing key deserializes to
//! `None` and marks the topic as structurally incomplete, while `null` or `[]`
//! both mean "no markers".

use serde::{Deserialize, Deserializer, Serialize};

/// One node of the mind-map tree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Topic {
    /// Topic text
    #[serde(default)]
    pub title: Option<String>,
    /// Topic note, used as a precondition source
    #[serde(default)]
    pub note: Option<String>,
    /// Topic comment, used as a summary or parameter source
    #[serde(default)]
    pub comment: Option<String>,
    /// Label tags
    #[serde(default, alias = "label", deserialize_with = "one_or_many")]
    pub labels: Vec<String>,
    /// Marker identifiers; `None` when the document carried no markers field
    #[serde(
        default,
        deserialize_with = "present_markers",
        skip_serializing_if = "Option::is_none"
    )]
    pub markers: Option<Vec<String>>,
    /// Child topics in document order
    #[serde(default, rename = "topics")]
    pub children: Vec<Self>,
}

/// A mind-map sheet: a title and its root topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    /// Sheet tab title
    #[serde(default)]
    pub title: String,
    /// Root topic of the sheet
    pub topic: Topic,
}

impl Topic {
    /// Create a topic with a title and an empty markers field.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            markers: Some(Vec::new()),
            ..Self::default()
        }
    }

    /// Set the note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Set the comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Replace the labels.
    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the markers.
    #[must_use]
    pub fn with_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.markers = Some(markers.into_iter().map(Into::into).collect());
        self
    }

    /// Drop the markers field entirely.
    #[must_use]
    pub fn without_markers(mut self) -> Self {
        self.markers = None;
        self
    }

    /// Replace the children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = children;
        self
    }

    /// Title text, or `""` when the topic has none.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// Markers, treating an absent field as empty.
    pub fn marker_list(&self) -> &[String] {
        self.markers.as_deref().unwrap_or_default()
    }
}

impl Sheet {
    /// Create a sheet.
    pub fn new(title: impl Into<String>, topic: Topic) -> Self {
        Self {
            title: title.into(),
            topic,
        }
    }
}

/// Whether a text value is usable: non-blank and not starting with an ignore
/// character.
pub fn is_meaningful(value: &str, ignore_chars: &str) -> bool {
    if value.trim().is_empty() {
        return false;
    }
    value
        .chars()
        .next()
        .is_none_or(|first| !ignore_chars.contains(first))
}

/// Keep topics with a meaningful title, recursively.
///
/// The input is left untouched. Running the result through this function
/// again removes nothing.
pub fn normalize_topics(topics: &[Topic], ignore_chars: &str) -> Vec<Topic> {
    topics
        .iter()
        .filter(|topic| {
            topic
                .title
                .as_deref()
                .is_some_and(|title| is_meaningful(title, ignore_chars))
        })
        .map(|topic| Topic {
            children: normalize_topics(&topic.children, ignore_chars),
            ..topic.clone()
        })
        .collect()
}

/// Keep meaningful text values, trimmed.
///
/// Used for titles, notes, comments and labels collected along an ancestor
/// chain.
pub fn filter_elements<'a, I>(values: I, ignore_chars: &str) -> Vec<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    values
        .into_iter()
        .flatten()
        .filter(|value| is_meaningful(value, ignore_chars))
        .map(|value| value.trim().to_string())
        .collect()
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(label)) => vec![label],
        Some(OneOrMany::Many(labels)) => labels,
        None => Vec::new(),
    })
}

fn present_markers<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(
        Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default(),
    ))
}
