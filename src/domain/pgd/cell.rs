//! Cell rosters of the five output matrices.
//!
//! Key spellings and roster order are pinned: they are the wire
//! contract every persisted profile and downstream consumer keys on.

use super::matrix::MatrixCell;

/// Cells of the main cup matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MainCupCell {
    A,
    B,
    V,
    G,
    D,
    L,
    E,
    K,
    J,
    Z,
    I,
    Y,
    M,
    N,
    O,
    P,
}

impl MatrixCell for MainCupCell {
    const MATRIX: &'static str = "main_cup";
    const ALL: &'static [Self] = &[
        MainCupCell::A,
        MainCupCell::B,
        MainCupCell::V,
        MainCupCell::G,
        MainCupCell::D,
        MainCupCell::L,
        MainCupCell::E,
        MainCupCell::K,
        MainCupCell::J,
        MainCupCell::Z,
        MainCupCell::I,
        MainCupCell::Y,
        MainCupCell::M,
        MainCupCell::N,
        MainCupCell::O,
        MainCupCell::P,
    ];

    fn key(&self) -> &'static str {
        match self {
            MainCupCell::A => "A",
            MainCupCell::B => "B",
            MainCupCell::V => "V",
            MainCupCell::G => "G",
            MainCupCell::D => "D",
            MainCupCell::L => "L",
            MainCupCell::E => "E",
            MainCupCell::K => "K",
            MainCupCell::J => "J",
            MainCupCell::Z => "Z",
            MainCupCell::I => "I",
            MainCupCell::Y => "Y",
            MainCupCell::M => "M",
            MainCupCell::N => "N",
            MainCupCell::O => "O",
            MainCupCell::P => "P",
        }
    }
}

/// Cells of the ancestral data matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AncestralCell {
    SelfDetermination,
    OppositeParent,
    Combined,
    InnerResource,
}

impl MatrixCell for AncestralCell {
    const MATRIX: &'static str = "ancestral_data";
    const ALL: &'static [Self] = &[
        AncestralCell::SelfDetermination,
        AncestralCell::OppositeParent,
        AncestralCell::Combined,
        AncestralCell::InnerResource,
    ];

    fn key(&self) -> &'static str {
        match self {
            AncestralCell::SelfDetermination => "RSD",
            AncestralCell::OppositeParent => "ROPP",
            AncestralCell::Combined => "RCO",
            AncestralCell::InnerResource => "RUS",
        }
    }
}

/// Cells of the crossroads matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrossroadsCell {
    SelfDetermination,
    OppositeParent,
    Combined,
    InnerResource,
}

impl MatrixCell for CrossroadsCell {
    const MATRIX: &'static str = "crossroads";
    const ALL: &'static [Self] = &[
        CrossroadsCell::SelfDetermination,
        CrossroadsCell::OppositeParent,
        CrossroadsCell::Combined,
        CrossroadsCell::InnerResource,
    ];

    fn key(&self) -> &'static str {
        match self {
            CrossroadsCell::SelfDetermination => "ISD",
            CrossroadsCell::OppositeParent => "IOPP",
            CrossroadsCell::Combined => "ICO",
            CrossroadsCell::InnerResource => "IUS",
        }
    }
}

/// Cells of the karmic tasks matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskCell {
    KarmaOfGenus,
    PersonalKarmaRelationships,
    DivineTax,
}

impl MatrixCell for TaskCell {
    const MATRIX: &'static str = "tasks";
    const ALL: &'static [Self] = &[
        TaskCell::KarmaOfGenus,
        TaskCell::PersonalKarmaRelationships,
        TaskCell::DivineTax,
    ];

    fn key(&self) -> &'static str {
        match self {
            TaskCell::KarmaOfGenus => "karma_of_genus",
            TaskCell::PersonalKarmaRelationships => "personal_karma_relationships",
            TaskCell::DivineTax => "divine_tax",
        }
    }
}

/// Cells of the business periods matrix, one per life period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodCell {
    Period1,
    Period2,
    Period3,
    Period4,
}

impl MatrixCell for PeriodCell {
    const MATRIX: &'static str = "business_periods";
    const ALL: &'static [Self] = &[
        PeriodCell::Period1,
        PeriodCell::Period2,
        PeriodCell::Period3,
        PeriodCell::Period4,
    ];

    fn key(&self) -> &'static str {
        match self {
            PeriodCell::Period1 => "period_1",
            PeriodCell::Period2 => "period_2",
            PeriodCell::Period3 => "period_3",
            PeriodCell::Period4 => "period_4",
        }
    }
}
