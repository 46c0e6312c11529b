//! Derivation context computed once per subject.
//!
//! Every cell formula is a projection of this immutable chart, so cell
//! evaluation stays order-independent: no formula ever reads another
//! cell's matrix output.

use super::digits::{DateComponent, DigitExtractor};
use super::reduction::{ReductionPolicy, Reducer};
use crate::domain::foundation::{Arcanum, BirthDate, Sex};

/// All derived quantities for one `(birth date, sex)` pair.
///
/// The three seed points come from the digit pipeline: `a` from the day
/// value, `b` from the month value, `v` from the year digit sum. The
/// rest is arcana arithmetic over the seeds. `m`/`n` exist only for
/// female subjects, `o`/`p` only for male ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chart {
    sex: Sex,
    a: Arcanum,
    b: Arcanum,
    v: Arcanum,
    g: Arcanum,
    d: Arcanum,
    l: Arcanum,
    e: Arcanum,
    k: Arcanum,
    j: Arcanum,
    z: Arcanum,
    i: Arcanum,
    y: Arcanum,
    m: Option<Arcanum>,
    n: Option<Arcanum>,
    o: Option<Arcanum>,
    p: Option<Arcanum>,
}

impl Chart {
    /// Derives the chart for a subject.
    pub fn derive(date: BirthDate, sex: Sex) -> Self {
        let a = Self::seed(date, DateComponent::Day, ReductionPolicy::Value);
        let b = Self::seed(date, DateComponent::Month, ReductionPolicy::Value);
        let v = Self::seed(date, DateComponent::Year, ReductionPolicy::DigitSum);

        let g = a + b + v;
        let d = a + b;
        let l = d.complement();
        let e = b + v;
        let k = e.complement();
        let j = d + e;
        let z = d.gap(e) + j;
        let i = j + z;
        let y = a + v + z;

        let (m, n, o, p) = match sex {
            Sex::Female => {
                let m = g + i + l;
                let n = m + y;
                (Some(m), Some(n), None, None)
            }
            Sex::Male => {
                let o = g + i + k;
                let p = o + y;
                (None, None, Some(o), Some(p))
            }
        };

        Self {
            sex,
            a,
            b,
            v,
            g,
            d,
            l,
            e,
            k,
            j,
            z,
            i,
            y,
            m,
            n,
            o,
            p,
        }
    }

    fn seed(date: BirthDate, component: DateComponent, policy: ReductionPolicy) -> Arcanum {
        let group = DigitExtractor::extract(date, component);
        Reducer::reduce(&group, policy)
            .expect("digit extraction yields a full-width group for every valid date")
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    // === Main cup points ===

    pub fn a(&self) -> Arcanum {
        self.a
    }

    pub fn b(&self) -> Arcanum {
        self.b
    }

    pub fn v(&self) -> Arcanum {
        self.v
    }

    pub fn g(&self) -> Arcanum {
        self.g
    }

    pub fn d(&self) -> Arcanum {
        self.d
    }

    pub fn l(&self) -> Arcanum {
        self.l
    }

    pub fn e(&self) -> Arcanum {
        self.e
    }

    pub fn k(&self) -> Arcanum {
        self.k
    }

    pub fn j(&self) -> Arcanum {
        self.j
    }

    pub fn z(&self) -> Arcanum {
        self.z
    }

    pub fn i(&self) -> Arcanum {
        self.i
    }

    pub fn y(&self) -> Arcanum {
        self.y
    }

    pub fn m(&self) -> Option<Arcanum> {
        self.m
    }

    pub fn n(&self) -> Option<Arcanum> {
        self.n
    }

    pub fn o(&self) -> Option<Arcanum> {
        self.o
    }

    pub fn p(&self) -> Option<Arcanum> {
        self.p
    }

    // === Ancestral bases ===

    /// Ancestral line of self-determination.
    pub fn rsd(&self) -> Arcanum {
        self.j
    }

    /// Ancestral line of the opposite parent; formula branches on sex.
    pub fn ropp(&self) -> Arcanum {
        match self.sex {
            Sex::Female => self.l + self.e,
            Sex::Male => self.d + self.k,
        }
    }

    /// Combined ancestral line.
    pub fn rco(&self) -> Arcanum {
        self.rsd() + self.ropp()
    }

    /// Ancestral line of inner resource.
    pub fn rus(&self) -> Arcanum {
        self.i
    }

    // === Crossroads ===

    /// The personal anchor point the crossroads are measured against:
    /// `n` for female subjects, `p` for male ones.
    pub fn anchor(&self) -> Option<Arcanum> {
        match self.sex {
            Sex::Female => self.n,
            Sex::Male => self.p,
        }
    }

    pub fn isd(&self) -> Option<Arcanum> {
        self.anchor().map(|anchor| self.rsd().gap(anchor))
    }

    pub fn iopp(&self) -> Option<Arcanum> {
        self.anchor().map(|anchor| self.ropp().gap(anchor))
    }

    pub fn ius(&self) -> Option<Arcanum> {
        self.anchor().map(|anchor| self.rus().gap(anchor))
    }

    pub fn ico(&self) -> Option<Arcanum> {
        match (self.isd(), self.iopp()) {
            (Some(isd), Some(iopp)) => Some(isd + iopp),
            _ => None,
        }
    }
}
