// File: crates/scatter-core/src/record.rs
// Summary: Record model (one row per state) and the fixed X/Y metric field sets.

/// One data row: a geographic unit with six numeric health/demographic metrics.
///
/// Metrics are coerced from text at load time; a value that fails coercion is
/// NaN and flows through scales/positions unchanged.
#[derive(Clone, Debug)]
pub struct Record {
    pub state: String,
    pub abbr: String,
    pub poverty: f64,
    pub age: f64,
    pub income: f64,
    pub obesity: f64,
    pub smokes: f64,
    pub healthcare: f64,
}

impl Record {
    /// Value of the metric currently mapped to the X axis.
    pub fn x_value(&self, field: XField) -> f64 {
        match field {
            XField::Poverty => self.poverty,
            XField::Age => self.age,
            XField::Income => self.income,
        }
    }

    /// Value of the metric currently mapped to the Y axis.
    pub fn y_value(&self, field: YField) -> f64 {
        match field {
            YField::Obesity => self.obesity,
            YField::Smokes => self.smokes,
            YField::Healthcare => self.healthcare,
        }
    }
}

/// Metrics selectable for the X axis. Exactly these three; the selection
/// invariant is carried by the type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XField {
    Poverty,
    Age,
    Income,
}

impl XField {
    pub const ALL: [XField; 3] = [XField::Poverty, XField::Age, XField::Income];

    /// CSV column header for this metric.
    pub fn column(self) -> &'static str {
        match self {
            XField::Poverty => "poverty",
            XField::Age => "age",
            XField::Income => "income",
        }
    }

    /// Clickable axis caption text.
    pub fn caption(self) -> &'static str {
        match self {
            XField::Poverty => "In Poverty (%)",
            XField::Age => "Age (Median)",
            XField::Income => "Household Income (Median)",
        }
    }

    /// Tooltip line prefix.
    pub fn tip_label(self) -> &'static str {
        match self {
            XField::Poverty => "Poverty:",
            XField::Age => "Age:",
            XField::Income => "Income: $",
        }
    }

    /// Tooltip value suffix ("%" for poverty, nothing otherwise).
    pub fn tip_suffix(self) -> &'static str {
        match self {
            XField::Poverty => "%",
            _ => "",
        }
    }
}

/// Metrics selectable for the Y axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YField {
    Obesity,
    Smokes,
    Healthcare,
}

impl YField {
    pub const ALL: [YField; 3] = [YField::Obesity, YField::Smokes, YField::Healthcare];

    /// CSV column header for this metric.
    pub fn column(self) -> &'static str {
        match self {
            YField::Obesity => "obesity",
            YField::Smokes => "smokes",
            YField::Healthcare => "healthcare",
        }
    }

    /// Clickable axis caption text.
    pub fn caption(self) -> &'static str {
        match self {
            YField::Obesity => "Obesity (%)",
            YField::Smokes => "Smokes (%)",
            YField::Healthcare => "Lacks Healthcare (%)",
        }
    }

    /// Tooltip line prefix. All Y metrics render with a "%" suffix.
    pub fn tip_label(self) -> &'static str {
        match self {
            YField::Obesity => "Obesity:",
            YField::Smokes => "Smokes:",
            YField::Healthcare => "Lacks Healthcare:",
        }
    }
}
