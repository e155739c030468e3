// car_catalog/src/core/features.rs

//! Editing helpers for a car's feature list.
//!
//! The store keeps `features` exactly as given. The admin form is where
//! entries get trimmed and duplicates are refused, and that is what lives here.

/// An ordered, duplicate-free list of feature labels being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureList(Vec<String>);

impl FeatureList {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds `raw` after trimming. Returns false (and changes nothing) when the
  /// trimmed label is blank or already present.
  pub fn add(&mut self, raw: &str) -> bool {
    let label = raw.trim();
    if label.is_empty() || self.contains(label) {
      return false;
    }
    self.0.push(label.to_string());
    true
  }

  /// Removes `label` if present.
  pub fn remove(&mut self, label: &str) -> bool {
    let before = self.0.len();
    self.0.retain(|existing| existing != label);
    self.0.len() != before
  }

  pub fn contains(&self, label: &str) -> bool {
    self.0.iter().any(|existing| existing == label)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn as_slice(&self) -> &[String] {
    &self.0
  }

  pub fn into_vec(self) -> Vec<String> {
    self.0
  }
}

impl<S: AsRef<str>> FromIterator<S> for FeatureList {
  fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
    let mut list = FeatureList::new();
    for raw in iter {
      list.add(raw.as_ref());
    }
    list
  }
}

/// Trims every entry, drops blanks, and keeps only the first occurrence of
/// each label.
pub fn normalize_features<I, S>(features: I) -> Vec<String>
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  features.into_iter().collect::<FeatureList>().into_vec()
}
