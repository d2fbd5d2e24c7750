//! Update-call modes and the merge-by-id resolution conforming engines apply.

use serde::{Deserialize, Serialize};

use super::{Axis, ChartOption, Series};

/// Component families subject to replace-merge updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentKind {
    Series,
    XAxis,
    YAxis,
}

/// Second parameter of the engine update call.
///
/// Every field is optional; a caller-supplied value is shallow-merged over
/// the adapter default ([`adapter_default`](Self::adapter_default)), field
/// by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateOpts {
    /// Discard all previous component state instead of merging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_merge: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lazy_update: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,
    /// Component kinds updated in replace-merge mode: components carrying a
    /// stable id are patched in place, the rest are replaced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace_merge: Option<Vec<ComponentKind>>,
}

impl UpdateOpts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The adapter's default mode: replace series/x-axis/y-axis components
    /// unless they declare a stable id. Replaced components may visibly
    /// flicker on update; merged ones update in place.
    #[must_use]
    pub fn adapter_default() -> Self {
        Self {
            not_merge: None,
            lazy_update: None,
            silent: None,
            replace_merge: Some(vec![
                ComponentKind::Series,
                ComponentKind::XAxis,
                ComponentKind::YAxis,
            ]),
        }
    }

    #[must_use]
    pub fn with_not_merge(mut self, not_merge: bool) -> Self {
        self.not_merge = Some(not_merge);
        self
    }

    #[must_use]
    pub fn with_lazy_update(mut self, lazy_update: bool) -> Self {
        self.lazy_update = Some(lazy_update);
        self
    }

    #[must_use]
    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = Some(silent);
        self
    }

    #[must_use]
    pub fn with_replace_merge(mut self, kinds: Vec<ComponentKind>) -> Self {
        self.replace_merge = Some(kinds);
        self
    }

    /// Shallow merge: fields set on `self` win, the rest fall back to `base`.
    #[must_use]
    pub fn merged_over(&self, base: &UpdateOpts) -> UpdateOpts {
        UpdateOpts {
            not_merge: self.not_merge.or(base.not_merge),
            lazy_update: self.lazy_update.or(base.lazy_update),
            silent: self.silent.or(base.silent),
            replace_merge: self
                .replace_merge
                .clone()
                .or_else(|| base.replace_merge.clone()),
        }
    }
}

/// Per-component instruction carried by one update call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateInstruction {
    /// In-place patch of the matching component (kind not under
    /// replace-merge).
    Merge,
    /// In-place patch matched on a stable id.
    MergeById(String),
    /// Full replacement; may visibly flicker.
    Replace,
}

/// Instructions for every replace-merge component family of one update call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdatePlan {
    pub series: Vec<UpdateInstruction>,
    pub x_axis: Vec<UpdateInstruction>,
    pub y_axis: Vec<UpdateInstruction>,
}

/// Resolves the instructions a conforming engine applies when `next` is
/// pushed on top of the previously applied option.
///
/// For each component of a kind listed in `opts.replace_merge`: a component
/// whose id also existed in the previous option is merged by id, any other
/// is replaced. Components of unlisted kinds merge in place. `not_merge`
/// forces replacement everywhere.
#[must_use]
pub fn plan_update(
    previous: Option<&ChartOption>,
    next: &ChartOption,
    opts: &UpdateOpts,
) -> UpdatePlan {
    let not_merge = opts.not_merge.unwrap_or(false);
    let replaced: &[ComponentKind] = opts.replace_merge.as_deref().unwrap_or(&[]);

    let series_ids =
        previous.map_or_else(Vec::new, |option| component_ids(&option.series, Series::id));
    let x_axis_ids =
        previous.map_or_else(Vec::new, |option| component_ids(&option.x_axis, Axis::id));
    let y_axis_ids =
        previous.map_or_else(Vec::new, |option| component_ids(&option.y_axis, Axis::id));

    UpdatePlan {
        series: component_instructions(
            not_merge,
            replaced.contains(&ComponentKind::Series),
            &series_ids,
            next.series.iter().map(Series::id),
        ),
        x_axis: component_instructions(
            not_merge,
            replaced.contains(&ComponentKind::XAxis),
            &x_axis_ids,
            next.x_axis.iter().map(Axis::id),
        ),
        y_axis: component_instructions(
            not_merge,
            replaced.contains(&ComponentKind::YAxis),
            &y_axis_ids,
            next.y_axis.iter().map(Axis::id),
        ),
    }
}

fn component_ids<T>(components: &[T], id: impl Fn(&T) -> Option<&str>) -> Vec<String> {
    components
        .iter()
        .filter_map(|component| id(component).map(str::to_owned))
        .collect()
}

fn component_instructions<'a>(
    not_merge: bool,
    replace_merge: bool,
    previous_ids: &[String],
    next_ids: impl Iterator<Item = Option<&'a str>>,
) -> Vec<UpdateInstruction> {
    next_ids
        .map(|id| {
            if not_merge {
                return UpdateInstruction::Replace;
            }
            if !replace_merge {
                return UpdateInstruction::Merge;
            }
            match id {
                Some(id) if previous_ids.iter().any(|previous| previous == id) => {
                    UpdateInstruction::MergeById(id.to_owned())
                }
                _ => UpdateInstruction::Replace,
            }
        })
        .collect()
}
