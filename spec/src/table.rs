//! The gate-to-center table.
//!
//! Every gate belongs to exactly one center. The canonical 64 rows are
//! transcribed below and validated when the table is first built; a
//! transcription mistake (a missing gate, a duplicate row, an empty center)
//! is reported as a [`ChartError::Configuration`] rather than producing a
//! table that silently answers wrong.

use std::sync::OnceLock;

use crate::error::ChartError;
use crate::model::{Center, Gate, CENTER_COUNT, GATE_COUNT};

use Center::{Ajna, Ego, Head, Root, Sacral, SolarPlexus, Spleen, Throat, G};

/// Canonical gate-to-center rows, in gate order.
pub const STANDARD_ROWS: [(u8, Center); GATE_COUNT] = [
    (1, G),
    (2, G),
    (3, Sacral),
    (4, Ajna),
    (5, Sacral),
    (6, SolarPlexus),
    (7, G),
    (8, Throat),
    (9, Sacral),
    (10, G),
    (11, Ajna),
    (12, Throat),
    (13, G),
    (14, Sacral),
    (15, G),
    (16, Throat),
    (17, Ajna),
    (18, Spleen),
    (19, Root),
    (20, Throat),
    (21, Ego),
    (22, SolarPlexus),
    (23, Throat),
    (24, Ajna),
    (25, G),
    (26, Ego),
    (27, Sacral),
    (28, Spleen),
    (29, Sacral),
    (30, SolarPlexus),
    (31, Throat),
    (32, Spleen),
    (33, Throat),
    (34, Sacral),
    (35, Throat),
    (36, SolarPlexus),
    (37, SolarPlexus),
    (38, Root),
    (39, Root),
    (40, Ego),
    (41, Root),
    (42, Sacral),
    (43, Ajna),
    (44, Spleen),
    (45, Throat),
    (46, G),
    (47, Ajna),
    (48, Spleen),
    (49, SolarPlexus),
    (50, Spleen),
    (51, Ego),
    (52, Root),
    (53, Root),
    (54, Root),
    (55, SolarPlexus),
    (56, Throat),
    (57, Spleen),
    (58, Root),
    (59, Sacral),
    (60, Root),
    (61, Head),
    (62, Throat),
    (63, Head),
    (64, Head),
];

/// A validated, total mapping from gate to center.
///
/// Once built, a table cannot be mutated; it is shared by reference between
/// any number of concurrent readers.
///
/// # Example
///
/// ```
/// use bodygraph_spec::{Center, GateCenterTable};
///
/// let table = GateCenterTable::standard().unwrap();
/// assert_eq!(table.lookup(1), Ok(Center::G));
/// assert_eq!(table.lookup(8), Ok(Center::Throat));
/// assert!(table.lookup(65).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateCenterTable {
    centers: [Center; GATE_COUNT],
}

impl GateCenterTable {
    /// Returns the canonical table, built and validated once per process.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Configuration`] if the transcribed rows do not
    /// form a complete table. The error is cached: every call returns it.
    pub fn standard() -> Result<&'static GateCenterTable, ChartError> {
        static TABLE: OnceLock<Result<GateCenterTable, ChartError>> = OnceLock::new();
        TABLE
            .get_or_init(|| Self::from_rows(&STANDARD_ROWS))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Builds a table from typed rows.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Configuration`] if a row names a gate outside
    /// 1..=64, a gate appears twice, a gate is missing, or a center has no
    /// gate mapped to it.
    pub fn from_rows(rows: &[(u8, Center)]) -> Result<Self, ChartError> {
        Self::build(rows.iter().map(|&(gate, center)| (i64::from(gate), center)))
    }

    /// Builds a table from rows whose centers are given by label
    /// (`"Solar Plexus"`, `"G"`, ...), as found in configuration files.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Configuration`] for an unknown center label or
    /// any of the conditions listed on [`GateCenterTable::from_rows`].
    pub fn from_named_rows<'a, I>(rows: I) -> Result<Self, ChartError>
    where
        I: IntoIterator<Item = (i64, &'a str)>,
    {
        let typed = rows
            .into_iter()
            .map(|(gate, name)| {
                name.parse::<Center>()
                    .map(|center| (gate, center))
                    .map_err(|_| {
                        ChartError::configuration(format!(
                            "gate {gate} is mapped to unknown center {name:?}"
                        ))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::build(typed)
    }

    fn build<I>(rows: I) -> Result<Self, ChartError>
    where
        I: IntoIterator<Item = (i64, Center)>,
    {
        let mut slots: [Option<Center>; GATE_COUNT] = [None; GATE_COUNT];

        for (number, center) in rows {
            let gate = Gate::new(number).map_err(|_| {
                ChartError::configuration(format!("row for gate {number} is outside 1..=64"))
            })?;
            let slot = &mut slots[gate.index()];
            if let Some(existing) = slot {
                return Err(ChartError::configuration(format!(
                    "gate {gate} is mapped twice ({existing} and {center})"
                )));
            }
            *slot = Some(center);
        }

        let missing: Vec<String> = Gate::all()
            .filter(|g| slots[g.index()].is_none())
            .map(|g| g.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ChartError::configuration(format!(
                "gates without a center: {}",
                missing.join(", ")
            )));
        }

        let mut centers = [Center::Head; GATE_COUNT];
        for (out, slot) in centers.iter_mut().zip(slots) {
            if let Some(center) = slot {
                *out = center;
            }
        }

        let mut populated = [false; CENTER_COUNT];
        for center in centers {
            populated[center as usize] = true;
        }
        if let Some(orphan) = Center::ALL
            .into_iter()
            .find(|&c| !populated[c as usize])
        {
            return Err(ChartError::configuration(format!(
                "center {orphan} has no gates"
            )));
        }

        Ok(Self { centers })
    }

    /// Returns the center of a gate.
    #[inline]
    #[must_use]
    pub fn center(&self, gate: Gate) -> Center {
        self.centers[gate.index()]
    }

    /// Looks up the center of a raw gate number.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::GateOutOfRange`] if `gate` is not in 1..=64.
    pub fn lookup(&self, gate: i64) -> Result<Center, ChartError> {
        Gate::new(gate).map(|g| self.center(g))
    }

    /// Returns the gates mapped to `center`, ascending.
    #[must_use]
    pub fn gates_of(&self, center: Center) -> Vec<Gate> {
        self.iter()
            .filter(|&(_, c)| c == center)
            .map(|(g, _)| g)
            .collect()
    }

    /// Iterates over all `(gate, center)` rows in gate order.
    pub fn iter(&self) -> impl Iterator<Item = (Gate, Center)> + '_ {
        Gate::all().map(move |g| (g, self.center(g)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> &'static GateCenterTable {
        GateCenterTable::standard().unwrap()
    }

    #[test]
    fn standard_table_is_total() {
        let table = standard();
        for n in 1..=64 {
            assert!(table.lookup(n).is_ok(), "gate {n} has no center");
        }
    }

    #[test]
    fn out_of_range_lookup() {
        let table = standard();
        assert_eq!(table.lookup(0), Err(ChartError::GateOutOfRange { gate: 0 }));
        assert_eq!(
            table.lookup(65),
            Err(ChartError::GateOutOfRange { gate: 65 })
        );
    }

    #[test]
    fn known_rows() {
        let table = standard();
        assert_eq!(table.lookup(1), Ok(G));
        assert_eq!(table.lookup(2), Ok(G));
        assert_eq!(table.lookup(8), Ok(Throat));
        assert_eq!(table.lookup(14), Ok(Sacral));
        assert_eq!(table.lookup(21), Ok(Ego));
        assert_eq!(table.lookup(48), Ok(Spleen));
        assert_eq!(table.lookup(51), Ok(Ego));
        assert_eq!(table.lookup(57), Ok(Spleen));
        assert_eq!(table.lookup(64), Ok(Head));
    }

    #[test]
    fn center_sizes() {
        let table = standard();
        let sizes: Vec<(Center, usize)> = Center::ALL
            .into_iter()
            .map(|c| (c, table.gates_of(c).len()))
            .collect();
        assert_eq!(
            sizes,
            [
                (Head, 3),
                (Ajna, 6),
                (Throat, 11),
                (G, 8),
                (Ego, 4),
                (SolarPlexus, 7),
                (Sacral, 9),
                (Spleen, 7),
                (Root, 9),
            ]
        );
    }

    #[test]
    fn standard_is_shared() {
        let a = standard() as *const GateCenterTable;
        let b = standard() as *const GateCenterTable;
        assert_eq!(a, b);
    }

    #[test]
    fn missing_gate_rejected() {
        let err = GateCenterTable::from_rows(&STANDARD_ROWS[..63]).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("64"), "{err}");
    }

    #[test]
    fn duplicate_gate_rejected() {
        let mut rows = STANDARD_ROWS.to_vec();
        rows.push((8, Throat));
        let err = GateCenterTable::from_rows(&rows).unwrap_err();
        assert!(err.to_string().contains("mapped twice"), "{err}");
    }

    #[test]
    fn out_of_range_row_rejected() {
        let mut rows = STANDARD_ROWS.to_vec();
        rows[0] = (65, G);
        let err = GateCenterTable::from_rows(&rows).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn orphan_center_rejected() {
        let rows: Vec<(u8, Center)> = STANDARD_ROWS
            .iter()
            .map(|&(g, c)| (g, if c == Head { Ajna } else { c }))
            .collect();
        let err = GateCenterTable::from_rows(&rows).unwrap_err();
        assert!(err.to_string().contains("Head"), "{err}");
    }

    #[test]
    fn named_rows_match_typed_rows() {
        let named: Vec<(i64, &str)> = STANDARD_ROWS
            .iter()
            .map(|&(g, c)| (i64::from(g), c.name()))
            .collect();
        let table = GateCenterTable::from_named_rows(named).unwrap();
        assert_eq!(&table, standard());
    }

    #[test]
    fn unknown_center_label_rejected() {
        let mut named: Vec<(i64, &str)> = STANDARD_ROWS
            .iter()
            .map(|&(g, c)| (i64::from(g), c.name()))
            .collect();
        named[5].1 = "Heart";
        let err = GateCenterTable::from_named_rows(named).unwrap_err();
        assert!(err.to_string().contains("Heart"), "{err}");
    }
}
