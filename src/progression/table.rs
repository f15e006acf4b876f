//! Level progression table
//!
//! Cumulative XP requirements for every level, plus the per-level deltas
//! derived from them. The standard table is baked in as static data.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// Highest level of the standard table
pub const MAX_LEVEL: u32 = 100;

/// Cumulative XP required to reach each level (index = level - 1)
pub const CUMULATIVE_XP_REQUIREMENTS: [i64; MAX_LEVEL as usize] = [
    0, 300, 621, 964, 1331, 1724, 2145, 2595, 3077, 3593,
    4145, 4736, 5368, 6044, 6767, 7541, 8369, 9255, 10203, 11217,
    12302, 13463, 14705, 16034, 17456, 18978, 20607, 22350, 24215, 26211,
    28347, 30633, 33079, 35696, 38496, 41492, 44698, 48128, 51798, 55725,
    59927, 64423, 69234, 74382, 79890, 85784, 92091, 98839, 106059, 113784,
    122050, 130895, 140359, 150485, 161320, 172913, 185318, 198591, 212793, 227989,
    244249, 261647, 280263, 300182, 321495, 344300, 368701, 394810, 422747, 452640,
    484626, 518851, 555472, 594656, 636583, 681445, 729447, 780809, 835766, 894570,
    957490, 1024814, 1096851, 1173931, 1256407, 1344656, 1439082, 1540118, 1648227, 1763904,
    1887678, 2020116, 2161825, 2313454, 2475697, 2649297, 2835049, 3033804, 3246472, 3474027,
];

/// XP needed to advance from the previous level (index = level - 1)
pub const XP_PER_LEVEL: [i64; MAX_LEVEL as usize] = [
    0, 300, 321, 343, 367, 393, 421, 450, 482, 516,
    552, 591, 632, 676, 723, 774, 828, 886, 948, 1014,
    1085, 1161, 1242, 1329, 1422, 1522, 1629, 1743, 1865, 1996,
    2136, 2286, 2446, 2617, 2800, 2996, 3206, 3430, 3670, 3927,
    4202, 4496, 4811, 5148, 5508, 5894, 6307, 6748, 7220, 7725,
    8266, 8845, 9464, 10126, 10835, 11593, 12405, 13273, 14202, 15196,
    16260, 17398, 18616, 19919, 21313, 22805, 24401, 26109, 27937, 29893,
    31986, 34225, 36621, 39184, 41927, 44862, 48002, 51362, 54957, 58804,
    62920, 67324, 72037, 77080, 82476, 88249, 94426, 101036, 108109, 115677,
    123774, 132438, 141709, 151629, 162243, 173600, 185752, 198755, 212668, 227555,
];

static STANDARD: ProgressionTable = ProgressionTable {
    cumulative: Cow::Borrowed(&CUMULATIVE_XP_REQUIREMENTS),
    deltas: Cow::Borrowed(&XP_PER_LEVEL),
};

/// Immutable XP-to-level lookup table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressionTable {
    cumulative: Cow<'static, [i64]>,
    deltas: Cow<'static, [i64]>,
}

/// On-disk description of a progression table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableSource {
    /// Total XP required to reach each level, starting at 0
    Cumulative(Vec<i64>),
    /// XP required to advance from the previous level, starting at 0
    PerLevel(Vec<i64>),
}

impl ProgressionTable {
    /// The built-in 100-level table
    pub fn standard() -> &'static ProgressionTable {
        &STANDARD
    }

    /// Build a table from cumulative requirements
    pub fn from_cumulative(cumulative: Vec<i64>) -> Result<Self, TableError> {
        let first = *cumulative.first().ok_or(TableError::Empty)?;
        if first != 0 {
            return Err(TableError::NonZeroStart(first));
        }

        let mut deltas = Vec::with_capacity(cumulative.len());
        deltas.push(0);
        for (i, pair) in cumulative.windows(2).enumerate() {
            let (previous, current) = (pair[0], pair[1]);
            let level = i as u32 + 2;
            if current < 0 {
                return Err(TableError::Negative { level, xp: current });
            }
            if current < previous {
                return Err(TableError::Decreasing { level, previous, current });
            }
            deltas.push(current - previous);
        }

        Ok(Self {
            cumulative: Cow::Owned(cumulative),
            deltas: Cow::Owned(deltas),
        })
    }

    /// Build a table from per-level deltas
    pub fn from_deltas(deltas: Vec<i64>) -> Result<Self, TableError> {
        let first = *deltas.first().ok_or(TableError::Empty)?;
        if first != 0 {
            return Err(TableError::NonZeroStart(first));
        }

        let mut cumulative = Vec::with_capacity(deltas.len());
        let mut total: i64 = 0;
        for (i, &delta) in deltas.iter().enumerate() {
            let level = i as u32 + 1;
            if delta < 0 {
                return Err(TableError::Negative { level, xp: delta });
            }
            total = total.checked_add(delta).ok_or(TableError::Overflow { level })?;
            cumulative.push(total);
        }

        Ok(Self {
            cumulative: Cow::Owned(cumulative),
            deltas: Cow::Owned(deltas),
        })
    }

    /// Build a table from a parsed source description
    pub fn from_source(source: TableSource) -> Result<Self, TableError> {
        match source {
            TableSource::Cumulative(values) => Self::from_cumulative(values),
            TableSource::PerLevel(values) => Self::from_deltas(values),
        }
    }

    /// Describe this table for serialization
    pub fn to_source(&self) -> TableSource {
        TableSource::Cumulative(self.cumulative.to_vec())
    }

    /// Highest reachable level
    pub fn max_level(&self) -> u32 {
        self.cumulative.len() as u32
    }

    /// Cumulative requirements, index = level - 1
    pub fn cumulative(&self) -> &[i64] {
        &self.cumulative
    }

    /// Per-level deltas, index = level - 1
    pub fn deltas(&self) -> &[i64] {
        &self.deltas
    }

    /// XP required to cap out the table
    pub fn max_xp(&self) -> i64 {
        self.cumulative[self.cumulative.len() - 1]
    }

    /// Clamp any integer level into `1..=max_level`
    pub(crate) fn clamp_level(&self, level: i64) -> u32 {
        level.clamp(1, self.max_level() as i64) as u32
    }
}

impl Default for ProgressionTable {
    fn default() -> Self {
        STANDARD.clone()
    }
}
