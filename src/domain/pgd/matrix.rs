//! Generic matrix assembly over declarative cell registries.
//!
//! A matrix is an ordered mapping from a fixed cell roster to
//! `Arcanum | null`. Rosters and key spellings are a compatibility
//! contract: downstream consumers key on them verbatim.

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

use crate::domain::foundation::{Arcanum, ConfigurationError};

/// A member of a matrix's fixed cell roster.
pub trait MatrixCell: Copy + Eq + fmt::Debug + 'static {
    /// Wire name of the owning matrix.
    const MATRIX: &'static str;

    /// Full roster in wire order.
    const ALL: &'static [Self];

    /// Stable wire key of this cell.
    fn key(&self) -> &'static str;

    /// Looks a cell up by its wire key.
    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().find(|cell| cell.key() == key).copied()
    }
}

/// One registry row: a cell bound to its formula over a derivation
/// context. Formulas are plain function pointers so registries can be
/// `const` tables.
pub struct CellSpec<C: MatrixCell, Ctx> {
    pub cell: C,
    pub formula: fn(&Ctx) -> Option<Arcanum>,
}

/// An assembled matrix: every roster cell, in roster order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<C: MatrixCell> {
    entries: Vec<(C, Option<Arcanum>)>,
}

impl<C: MatrixCell> Matrix<C> {
    /// Evaluates a registry against a context.
    ///
    /// The registry must bind every roster cell exactly once; anything
    /// else is a packaging bug surfaced as `ConfigurationError` rather
    /// than a partially wrong matrix.
    pub fn build<Ctx>(
        registry: &[CellSpec<C, Ctx>],
        context: &Ctx,
    ) -> Result<Self, ConfigurationError> {
        if registry.len() != C::ALL.len() {
            return Err(ConfigurationError::RegistrySize {
                matrix: C::MATRIX,
                expected: C::ALL.len(),
                actual: registry.len(),
            });
        }

        let mut entries = Vec::with_capacity(C::ALL.len());
        for &cell in C::ALL {
            let mut bindings = registry.iter().filter(|spec| spec.cell == cell);
            let spec = bindings.next().ok_or(ConfigurationError::MissingCell {
                matrix: C::MATRIX,
                cell: cell.key(),
            })?;
            let extra = bindings.count();
            if extra > 0 {
                return Err(ConfigurationError::DuplicateCell {
                    matrix: C::MATRIX,
                    cell: cell.key(),
                    count: extra + 1,
                });
            }
            entries.push((cell, (spec.formula)(context)));
        }

        Ok(Self { entries })
    }

    /// Returns a cell's value; `None` means the cell is null.
    pub fn get(&self, cell: C) -> Option<Arcanum> {
        self.entries
            .iter()
            .find(|(entry_cell, _)| *entry_cell == cell)
            .and_then(|(_, value)| *value)
    }

    /// Iterates cells in roster order.
    pub fn cells(&self) -> impl Iterator<Item = (C, Option<Arcanum>)> + '_ {
        self.entries.iter().copied()
    }

    /// All non-null values in roster order.
    pub fn defined_values(&self) -> Vec<Arcanum> {
        self.entries.iter().filter_map(|(_, value)| *value).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C: MatrixCell> Serialize for Matrix<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (cell, value) in &self.entries {
            // Option serializes null explicitly; absence is never elided.
            map.serialize_entry(cell.key(), value)?;
        }
        map.end()
    }
}

struct MatrixVisitor<C>(PhantomData<C>);

impl<'de, C: MatrixCell> Visitor<'de> for MatrixVisitor<C> {
    type Value = Matrix<C>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a map of {} cell names to integers or null", C::MATRIX)
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Matrix<C>, M::Error> {
        let mut seen: Vec<(C, Option<Arcanum>)> = Vec::with_capacity(C::ALL.len());
        while let Some(key) = access.next_key::<String>()? {
            let cell = C::from_key(&key).ok_or_else(|| {
                de::Error::custom(format!("unknown cell '{}' in matrix '{}'", key, C::MATRIX))
            })?;
            if seen.iter().any(|(existing, _)| *existing == cell) {
                return Err(de::Error::custom(format!(
                    "duplicate cell '{}' in matrix '{}'",
                    key,
                    C::MATRIX
                )));
            }
            let value = match access.next_value::<Option<u8>>()? {
                Some(number) => Some(Arcanum::try_new(number).map_err(de::Error::custom)?),
                None => None,
            };
            seen.push((cell, value));
        }

        let mut entries = Vec::with_capacity(C::ALL.len());
        for &cell in C::ALL {
            let entry = seen
                .iter()
                .find(|(seen_cell, _)| *seen_cell == cell)
                .ok_or_else(|| de::Error::missing_field(cell.key()))?;
            entries.push(*entry);
        }
        Ok(Matrix { entries })
    }
}

impl<'de, C: MatrixCell> Deserialize<'de> for Matrix<C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MatrixVisitor(PhantomData))
    }
}
