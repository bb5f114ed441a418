use serde::Deserialize;

/// One row of the ARDD fatalities CSV as it appears on disk. Columns not
/// listed here are ignored by the deserializer.
#[derive(Debug, Deserialize)]
pub struct RawRow {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Month")]
    pub month: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Dayweek")]
    pub dayweek: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Crash Type")]
    pub crash_type: String,
    #[serde(rename = "Age Group")]
    pub age_group: String,
    #[serde(rename = "Christmas Period")]
    pub christmas_period: String,
    #[serde(rename = "Easter Period")]
    pub easter_period: String,
    #[serde(rename = "National Remoteness Areas")]
    pub remoteness_area: String,
    #[serde(rename = "Road User")]
    pub road_user: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccidentRecord {
    pub state: String,
    /// Two-digit month, `"01"` through `"12"`.
    pub month: String,
    pub year: i32,
    pub dayweek: String,
    pub time: String,
    pub crash_type: String,
    pub age_group: String,
    pub christmas_period: String,
    pub easter_period: String,
    pub remoteness_area: String,
    pub road_user: String,
}

/// Text columns an insight can be computed over. `Year` is numeric and
/// never grouped on, so it is not listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    State,
    Month,
    Dayweek,
    Time,
    CrashType,
    AgeGroup,
    ChristmasPeriod,
    EasterPeriod,
    RemotenessArea,
    RoadUser,
}

impl Column {
    pub const ALL: [Column; 10] = [
        Column::State,
        Column::Month,
        Column::Dayweek,
        Column::Time,
        Column::CrashType,
        Column::AgeGroup,
        Column::ChristmasPeriod,
        Column::EasterPeriod,
        Column::RemotenessArea,
        Column::RoadUser,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::State => "State",
            Column::Month => "Month",
            Column::Dayweek => "Dayweek",
            Column::Time => "Time",
            Column::CrashType => "Crash Type",
            Column::AgeGroup => "Age Group",
            Column::ChristmasPeriod => "Christmas Period",
            Column::EasterPeriod => "Easter Period",
            Column::RemotenessArea => "National Remoteness Areas",
            Column::RoadUser => "Road User",
        }
    }

    pub fn value(self, r: &AccidentRecord) -> &str {
        match self {
            Column::State => &r.state,
            Column::Month => &r.month,
            Column::Dayweek => &r.dayweek,
            Column::Time => &r.time,
            Column::CrashType => &r.crash_type,
            Column::AgeGroup => &r.age_group,
            Column::ChristmasPeriod => &r.christmas_period,
            Column::EasterPeriod => &r.easter_period,
            Column::RemotenessArea => &r.remoteness_area,
            Column::RoadUser => &r.road_user,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadReport {
    pub total_rows: usize,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
}
