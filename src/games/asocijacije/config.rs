//! Asocijacije configuration: four clue columns and a final solution.

use serde::{Deserialize, Serialize};

use crate::config::{require_text, GameConfiguration, GameKind};
use crate::error::ConfigError;

/// Clue fields per column.
pub const FIELD_COUNT: usize = 4;

/// Column of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    A,
    B,
    C,
    D,
}

impl Column {
    pub const ALL: [Column; 4] = [Column::A, Column::B, Column::C, Column::D];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Column::A => 'A',
            Column::B => 'B',
            Column::C => 'C',
            Column::D => 'D',
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "column {}", self.letter())
    }
}

/// One column's clues and its solution.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnClues {
    pub field1: String,
    pub field2: String,
    pub field3: String,
    pub field4: String,
    pub solution: String,
}

impl ColumnClues {
    pub fn new(fields: [&str; FIELD_COUNT], solution: impl Into<String>) -> Self {
        let [field1, field2, field3, field4] = fields.map(String::from);
        Self {
            field1,
            field2,
            field3,
            field4,
            solution: solution.into(),
        }
    }

    #[must_use]
    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        [&self.field1, &self.field2, &self.field3, &self.field4]
    }

    /// Clue `index` (0-based).
    #[must_use]
    pub fn field(&self, index: usize) -> Option<&str> {
        match index {
            0 => Some(&self.field1),
            1 => Some(&self.field2),
            2 => Some(&self.field3),
            3 => Some(&self.field4),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsocijacijeConfig {
    pub column_a: ColumnClues,
    pub column_b: ColumnClues,
    pub column_c: ColumnClues,
    pub column_d: ColumnClues,
    pub final_solution: String,
    pub is_configured: bool,
}

impl AsocijacijeConfig {
    /// A configured board.
    pub fn new(columns: [ColumnClues; 4], final_solution: impl Into<String>) -> Self {
        let [column_a, column_b, column_c, column_d] = columns;
        Self {
            column_a,
            column_b,
            column_c,
            column_d,
            final_solution: final_solution.into(),
            is_configured: true,
        }
    }

    #[must_use]
    pub fn column(&self, column: Column) -> &ColumnClues {
        match column {
            Column::A => &self.column_a,
            Column::B => &self.column_b,
            Column::C => &self.column_c,
            Column::D => &self.column_d,
        }
    }
}

impl GameConfiguration for AsocijacijeConfig {
    const KIND: GameKind = GameKind::Asocijacije;

    fn is_configured(&self) -> bool {
        self.is_configured
    }

    fn validate_content(&self) -> Result<(), ConfigError> {
        for column in Column::ALL {
            let clues = self.column(column);
            for (index, value) in clues.fields().into_iter().enumerate() {
                require_text(Self::KIND, format!("column{}.field{}", column.letter(), index + 1), value)?;
            }
            require_text(Self::KIND, format!("column{}.solution", column.letter()), &clues.solution)?;
        }
        require_text(Self::KIND, "finalSolution", &self.final_solution)
    }
}
