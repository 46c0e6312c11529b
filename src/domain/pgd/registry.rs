//! Declarative cell-formula registries, one table per matrix.
//!
//! Each table binds every roster cell to a formula over the derivation
//! [`Chart`]. The tables are the authoritative cell-to-source mapping;
//! tests pin them with golden values.

use super::cell::{AncestralCell, CrossroadsCell, MainCupCell, PeriodCell, TaskCell};
use super::chart::Chart;
use super::matrix::CellSpec;
use crate::domain::foundation::Arcanum;

/// Main cup: the three date seeds plus derived and sex-specific points.
pub const MAIN_CUP_REGISTRY: &[CellSpec<MainCupCell, Chart>] = &[
    CellSpec { cell: MainCupCell::A, formula: |c| Some(c.a()) },
    CellSpec { cell: MainCupCell::B, formula: |c| Some(c.b()) },
    CellSpec { cell: MainCupCell::V, formula: |c| Some(c.v()) },
    CellSpec { cell: MainCupCell::G, formula: |c| Some(c.g()) },
    CellSpec { cell: MainCupCell::D, formula: |c| Some(c.d()) },
    CellSpec { cell: MainCupCell::L, formula: |c| Some(c.l()) },
    CellSpec { cell: MainCupCell::E, formula: |c| Some(c.e()) },
    CellSpec { cell: MainCupCell::K, formula: |c| Some(c.k()) },
    CellSpec { cell: MainCupCell::J, formula: |c| Some(c.j()) },
    CellSpec { cell: MainCupCell::Z, formula: |c| Some(c.z()) },
    CellSpec { cell: MainCupCell::I, formula: |c| Some(c.i()) },
    CellSpec { cell: MainCupCell::Y, formula: |c| Some(c.y()) },
    CellSpec { cell: MainCupCell::M, formula: Chart::m },
    CellSpec { cell: MainCupCell::N, formula: Chart::n },
    CellSpec { cell: MainCupCell::O, formula: Chart::o },
    CellSpec { cell: MainCupCell::P, formula: Chart::p },
];

/// Ancestral data: the four ancestral lines.
pub const ANCESTRAL_REGISTRY: &[CellSpec<AncestralCell, Chart>] = &[
    CellSpec { cell: AncestralCell::SelfDetermination, formula: |c| Some(c.rsd()) },
    CellSpec { cell: AncestralCell::OppositeParent, formula: |c| Some(c.ropp()) },
    CellSpec { cell: AncestralCell::Combined, formula: |c| Some(c.rco()) },
    CellSpec { cell: AncestralCell::InnerResource, formula: |c| Some(c.rus()) },
];

/// Crossroads: each ancestral line measured against the sex anchor.
pub const CROSSROADS_REGISTRY: &[CellSpec<CrossroadsCell, Chart>] = &[
    CellSpec { cell: CrossroadsCell::SelfDetermination, formula: Chart::isd },
    CellSpec { cell: CrossroadsCell::OppositeParent, formula: Chart::iopp },
    CellSpec { cell: CrossroadsCell::Combined, formula: Chart::ico },
    CellSpec { cell: CrossroadsCell::InnerResource, formula: Chart::ius },
];

/// Karmic tasks: repeat statistics over matrix value populations.
///
/// A task cell sums every distinct value occurring at least three times
/// in its source population and folds the sum; no repeats means null.
pub const TASKS_REGISTRY: &[CellSpec<TaskCell, Chart>] = &[
    CellSpec {
        cell: TaskCell::KarmaOfGenus,
        formula: |c| repeated_sum(&main_cup_values(c), 3),
    },
    CellSpec {
        cell: TaskCell::PersonalKarmaRelationships,
        formula: |c| {
            let mut values = main_cup_values(c);
            values.extend(ancestral_values(c));
            repeated_sum(&values, 3)
        },
    },
    CellSpec {
        cell: TaskCell::DivineTax,
        formula: |c| {
            let mut values = main_cup_values(c);
            values.extend(crossroads_values(c));
            repeated_sum(&values, 3)
        },
    },
];

/// Business periods: life-stage cells over the repeated main-cup values.
///
/// Periods 1-3 partition the arcana range (1-10, 11-20, then 0 and 21);
/// period 4 folds the sum of the defined periods. Each formula
/// recomputes its slice from the chart, keeping cells independent.
pub const BUSINESS_PERIODS_REGISTRY: &[CellSpec<PeriodCell, Chart>] = &[
    CellSpec { cell: PeriodCell::Period1, formula: period_1 },
    CellSpec { cell: PeriodCell::Period2, formula: period_2 },
    CellSpec { cell: PeriodCell::Period3, formula: period_3 },
    CellSpec {
        cell: PeriodCell::Period4,
        formula: |c| {
            let parts: Vec<Arcanum> = [period_1(c), period_2(c), period_3(c)]
                .into_iter()
                .flatten()
                .collect();
            fold_sum(&parts)
        },
    },
];

/// True when the main cup has at least one repeated value.
///
/// The business periods matrix exists only under this precondition; the
/// calculator emits null for the whole matrix otherwise.
pub fn has_business_periods(chart: &Chart) -> bool {
    !repeated_values(&main_cup_values(chart), 2).is_empty()
}

fn period_1(chart: &Chart) -> Option<Arcanum> {
    period_slice(chart, |v| (1..=10).contains(&v))
}

fn period_2(chart: &Chart) -> Option<Arcanum> {
    period_slice(chart, |v| (11..=20).contains(&v))
}

fn period_3(chart: &Chart) -> Option<Arcanum> {
    period_slice(chart, |v| v == 0 || v == 21)
}

fn period_slice(chart: &Chart, keep: fn(u8) -> bool) -> Option<Arcanum> {
    let slice: Vec<Arcanum> = repeated_values(&main_cup_values(chart), 2)
        .into_iter()
        .filter(|value| keep(value.value()))
        .collect();
    fold_sum(&slice)
}

/// Defined main-cup values in roster order.
fn main_cup_values(chart: &Chart) -> Vec<Arcanum> {
    MAIN_CUP_REGISTRY
        .iter()
        .filter_map(|spec| (spec.formula)(chart))
        .collect()
}

fn ancestral_values(chart: &Chart) -> Vec<Arcanum> {
    ANCESTRAL_REGISTRY
        .iter()
        .filter_map(|spec| (spec.formula)(chart))
        .collect()
}

fn crossroads_values(chart: &Chart) -> Vec<Arcanum> {
    CROSSROADS_REGISTRY
        .iter()
        .filter_map(|spec| (spec.formula)(chart))
        .collect()
}

/// Distinct values occurring at least `min_count` times, ascending.
fn repeated_values(values: &[Arcanum], min_count: usize) -> Vec<Arcanum> {
    let mut counts = [0usize; 22];
    for value in values {
        counts[usize::from(value.value())] += 1;
    }
    counts
        .iter()
        .enumerate()
        .filter(|(_, &count)| count >= min_count)
        .map(|(value, _)| Arcanum::fold(value as u32))
        .collect()
}

/// Folds the repeated-value sum; null when nothing repeats.
fn repeated_sum(values: &[Arcanum], min_count: usize) -> Option<Arcanum> {
    fold_sum(&repeated_values(values, min_count))
}

fn fold_sum(values: &[Arcanum]) -> Option<Arcanum> {
    if values.is_empty() {
        return None;
    }
    let sum: u32 = values.iter().map(|v| u32::from(v.value())).sum();
    Some(Arcanum::fold(sum))
}
