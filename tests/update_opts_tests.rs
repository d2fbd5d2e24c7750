use chart_embed::option::{
    Axis, ChartOption, ComponentKind, Series, UpdateInstruction, UpdateOpts, plan_update,
};

use proptest::prelude::*;

#[test]
fn adapter_default_replace_merges_series_and_axes() {
    let opts = UpdateOpts::adapter_default();
    assert_eq!(opts.not_merge, None);
    assert_eq!(
        opts.replace_merge,
        Some(vec![
            ComponentKind::Series,
            ComponentKind::XAxis,
            ComponentKind::YAxis,
        ])
    );
}

#[test]
fn empty_override_keeps_the_base() {
    let base = UpdateOpts::adapter_default();
    let merged = UpdateOpts::new().merged_over(&base);
    assert_eq!(merged, base);
}

#[test]
fn override_fields_win_over_the_base() {
    let base = UpdateOpts::adapter_default().with_silent(false);
    let merged = UpdateOpts::new()
        .with_silent(true)
        .with_replace_merge(vec![ComponentKind::Series])
        .merged_over(&base);
    assert_eq!(merged.silent, Some(true));
    assert_eq!(merged.replace_merge, Some(vec![ComponentKind::Series]));
    assert_eq!(merged.not_merge, None);
}

#[test]
fn merge_by_id_requires_a_previous_component_with_that_id() {
    let previous = ChartOption::new()
        .with_series(Series::line("s1"))
        .with_series(Series::new("line"));
    let next = ChartOption::new()
        .with_series(Series::line("s1"))
        .with_series(Series::line("s2"))
        .with_series(Series::new("line"));

    let plan = plan_update(Some(&previous), &next, &UpdateOpts::adapter_default());

    assert_eq!(
        plan.series,
        vec![
            UpdateInstruction::MergeById("s1".to_owned()),
            UpdateInstruction::Replace,
            UpdateInstruction::Replace,
        ]
    );
}

#[test]
fn unlisted_kinds_merge_in_place() {
    let previous = ChartOption::new().with_x_axis(Axis::category());
    let next = ChartOption::new().with_x_axis(Axis::category());
    let opts = UpdateOpts::new().with_replace_merge(vec![ComponentKind::Series]);

    let plan = plan_update(Some(&previous), &next, &opts);
    assert_eq!(plan.x_axis, vec![UpdateInstruction::Merge]);
}

#[test]
fn not_merge_overrides_everything() {
    let previous = ChartOption::new().with_series(Series::line("s1"));
    let next = ChartOption::new().with_series(Series::line("s1"));
    let opts = UpdateOpts::adapter_default().with_not_merge(true);

    let plan = plan_update(Some(&previous), &next, &opts);
    assert_eq!(plan.series, vec![UpdateInstruction::Replace]);
}

fn opt_bool() -> impl Strategy<Value = Option<bool>> {
    proptest::option::of(any::<bool>())
}

proptest! {
    #[test]
    fn merged_over_is_field_wise_first_some(
        a in opt_bool(), b in opt_bool(), c in opt_bool(),
        d in opt_bool(), e in opt_bool(), f in opt_bool(),
    ) {
        let over = UpdateOpts {
            not_merge: a,
            lazy_update: b,
            silent: c,
            replace_merge: None,
        };
        let base = UpdateOpts {
            not_merge: d,
            lazy_update: e,
            silent: f,
            replace_merge: Some(vec![ComponentKind::Series]),
        };
        let merged = over.merged_over(&base);
        prop_assert_eq!(merged.not_merge, a.or(d));
        prop_assert_eq!(merged.lazy_update, b.or(e));
        prop_assert_eq!(merged.silent, c.or(f));
        prop_assert_eq!(merged.replace_merge, base.replace_merge);
    }

    #[test]
    fn plan_covers_every_next_component(
        ids in proptest::collection::vec(proptest::option::of("[a-z]{1,4}"), 0..6),
    ) {
        let mut next = ChartOption::new();
        for id in &ids {
            let mut series = Series::new("line");
            if let Some(id) = id {
                series = series.with_id(id.clone());
            }
            next = next.with_series(series);
        }

        let plan = plan_update(None, &next, &UpdateOpts::adapter_default());
        prop_assert_eq!(plan.series.len(), ids.len());
        // Without a previous option there is nothing to merge into.
        prop_assert!(plan.series.iter().all(|i| *i == UpdateInstruction::Replace));
    }
}
