//! Configuration types, defaults, and the per-invocation merge.
//!
//! A [`Config`] is built fresh for every public call by merging caller
//! overrides onto the library defaults. The merge is shallow per top-level
//! key: a supplied `attrs` mapping replaces the entire default mapping, it
//! is not merged key-by-key. The merged value is immutable and shared by
//! reference across every element of that invocation, so the defaults are
//! never mutated and concurrent calls never share nested state.

use std::collections::BTreeMap;

/// Mapping of real attribute name to its staged ("lazy") counterpart.
///
/// The staged attribute holds the asset path withheld from the real
/// attribute until the element becomes visible.
pub type AttrMap = BTreeMap<String, String>;

/// Tuning for the viewport-intersection watcher.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ObserverTuning {
    /// CSS selector for the intersection root; `None` means the viewport.
    pub root: Option<String>,
    /// Margin grown around the root when computing intersections.
    pub root_margin: String,
    /// Visible fraction (0.0 to 1.0) required before an element counts as
    /// intersecting.
    pub threshold: f64,
}

impl Default for ObserverTuning {
    fn default() -> Self {
        Self {
            root: None,
            root_margin: "100% 0px".to_string(),
            threshold: 1.0,
        }
    }
}

/// Caller-supplied partial configuration, any subset of fields.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Overrides {
    pub attrs: Option<AttrMap>,
    pub observer: Option<ObserverTuning>,
    pub strict: Option<bool>,
}

/// Full configuration for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Real attribute name -> staged attribute name.
    pub attrs: AttrMap,
    /// Intersection watcher tuning.
    pub observer: ObserverTuning,
    /// Whether a string selector matching zero elements is an error
    /// (logged, never thrown) or iterates zero times silently.
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            attrs: default_attrs(),
            observer: ObserverTuning::default(),
            strict: true,
        }
    }
}

impl Config {
    /// Merge caller overrides onto the defaults.
    ///
    /// Shallow per top-level key; the observer threshold is clamped into
    /// `[0.0, 1.0]` (a non-finite value falls back to the default).
    pub fn merge(overrides: Overrides) -> Self {
        let defaults = Config::default();
        let mut observer = overrides.observer.unwrap_or(defaults.observer);
        observer.threshold = if observer.threshold.is_finite() {
            observer.threshold.clamp(0.0, 1.0)
        } else {
            ObserverTuning::default().threshold
        };
        Self {
            attrs: overrides.attrs.unwrap_or(defaults.attrs),
            observer,
            strict: overrides.strict.unwrap_or(defaults.strict),
        }
    }
}

fn default_attrs() -> AttrMap {
    AttrMap::from([
        ("src".to_string(), "lazy".to_string()),
        ("srcset".to_string(), "lazy-srcset".to_string()),
        ("poster".to_string(), "lazy-poster".to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.attrs.get("src"), Some(&"lazy".to_string()));
        assert_eq!(config.attrs.get("srcset"), Some(&"lazy-srcset".to_string()));
        assert_eq!(config.attrs.get("poster"), Some(&"lazy-poster".to_string()));
        assert_eq!(config.observer.root, None);
        assert_eq!(config.observer.root_margin, "100% 0px");
        assert_eq!(config.observer.threshold, 1.0);
        assert!(config.strict);
    }

    #[test]
    fn test_merge_empty_overrides_yields_defaults() {
        assert_eq!(Config::merge(Overrides::default()), Config::default());
    }

    #[test]
    fn test_attrs_override_replaces_whole_mapping() {
        let mut overrides = Overrides::default();
        overrides.attrs = Some(AttrMap::from([(
            "src".to_string(),
            "data-src".to_string(),
        )]));

        let config = Config::merge(overrides);
        assert_eq!(config.attrs.get("src"), Some(&"data-src".to_string()));
        // Not merged key-by-key: the default srcset/poster entries are gone.
        assert_eq!(config.attrs.len(), 1);
    }

    #[test]
    fn test_observer_override_replaces_whole_tuning() {
        let mut overrides = Overrides::default();
        overrides.observer = Some(ObserverTuning {
            threshold: 0.5,
            ..ObserverTuning::default()
        });

        let config = Config::merge(overrides);
        assert_eq!(config.observer.threshold, 0.5);
        assert_eq!(config.observer.root_margin, "100% 0px");
    }

    #[test]
    fn test_strict_override() {
        let mut overrides = Overrides::default();
        overrides.strict = Some(false);
        assert!(!Config::merge(overrides).strict);
    }

    #[test]
    fn test_merge_does_not_mutate_defaults() {
        let before = Config::default();
        let mut overrides = Overrides::default();
        overrides.attrs = Some(AttrMap::new());
        let _ = Config::merge(overrides);
        assert_eq!(Config::default(), before);
    }

    #[test]
    fn test_threshold_non_finite_falls_back() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut overrides = Overrides::default();
            overrides.observer = Some(ObserverTuning {
                threshold: bad,
                ..ObserverTuning::default()
            });
            assert_eq!(Config::merge(overrides).observer.threshold, 1.0);
        }
    }

    proptest! {
        #[test]
        fn prop_merged_threshold_always_in_unit_range(threshold in any::<f64>()) {
            let mut overrides = Overrides::default();
            overrides.observer = Some(ObserverTuning {
                threshold,
                ..ObserverTuning::default()
            });
            let merged = Config::merge(overrides).observer.threshold;
            prop_assert!((0.0..=1.0).contains(&merged));
        }

        #[test]
        fn prop_attrs_override_wins_wholesale(
            attrs in proptest::collection::btree_map("[a-z-]{1,12}", "[a-z-]{1,12}", 0..4)
        ) {
            let mut overrides = Overrides::default();
            overrides.attrs = Some(attrs.clone());
            prop_assert_eq!(Config::merge(overrides).attrs, attrs);
        }
    }
}
