//! Insight Engine
//!
//! Turns the loaded accident table into a fixed catalog of precomputed
//! summaries. Each selectable insight is one row of [`INSIGHTS`]; the
//! catalog is built eagerly once and then only read.
//!
//! Categorical distributions are ordered by descending count. Categories
//! with equal counts keep the order in which they first appear in the
//! table.

use crate::error::{Error, Result};
use crate::types::{AccidentRecord, Column};
use std::collections::HashMap;
use std::str::FromStr;
use tracing::{debug, info};

/// Closed set of insights a user can pick from, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    StateWise,
    Monthly,
    DayOfWeek,
    TimeOfDay,
    CrashType,
    AgeGroup,
    HolidayPeriod,
    Regional,
    RoadUser,
}

impl Selection {
    pub const ALL: [Selection; 9] = [
        Selection::StateWise,
        Selection::Monthly,
        Selection::DayOfWeek,
        Selection::TimeOfDay,
        Selection::CrashType,
        Selection::AgeGroup,
        Selection::HolidayPeriod,
        Selection::Regional,
        Selection::RoadUser,
    ];

    pub fn info(self) -> &'static InsightInfo {
        // INSIGHTS is laid out in the same order as ALL.
        &INSIGHTS[self as usize]
    }

    pub fn key(self) -> &'static str {
        self.info().key
    }
}

impl FromStr for Selection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Selection::ALL
            .iter()
            .copied()
            .find(|sel| sel.key() == s)
            .ok_or_else(|| Error::UnknownSelection(s.to_string()))
    }
}

/// What an insight measures.
#[derive(Debug, Clone, Copy)]
pub enum Measure {
    /// Group every record by the column's exact text and count.
    Distribution(Column),
    /// Count records whose flag column equals `"Yes"`, once per listed
    /// column. Each column is counted over the full table.
    FlagCounts(&'static [(&'static str, Column)]),
}

/// Static description of one selectable insight.
#[derive(Debug)]
pub struct InsightInfo {
    pub selection: Selection,
    pub key: &'static str,
    pub heading: &'static str,
    pub description: &'static str,
    /// Label for the category axis; unused for flag counts.
    pub label: &'static str,
    pub title: &'static str,
    pub measure: Measure,
}

pub const COUNT_LABEL: &str = "Number of Crashes";
pub const FLAG_YES: &str = "Yes";

pub static INSIGHTS: [InsightInfo; 9] = [
    InsightInfo {
        selection: Selection::StateWise,
        key: "State-wise Distribution",
        heading: "State-wise Distribution of Crashes",
        description: "This visualization shows the number of traffic accidents by state. It helps identify which states have higher accident rates.",
        label: "State",
        title: "Number of Crashes by State",
        measure: Measure::Distribution(Column::State),
    },
    InsightInfo {
        selection: Selection::Monthly,
        key: "Monthly Trends",
        heading: "Monthly Trends in Crashes",
        description: "This visualization shows the monthly trends in traffic accidents. It helps to identify which months have higher accident rates.",
        label: "Month",
        title: "Number of Crashes by Month",
        measure: Measure::Distribution(Column::Month),
    },
    InsightInfo {
        selection: Selection::DayOfWeek,
        key: "Day of the Week",
        heading: "Day of the Week Analysis",
        description: "This visualization shows the number of traffic accidents by day of the week. It helps to understand which days have more accidents.",
        label: "Day of Week",
        title: "Number of Crashes by Day of the Week",
        measure: Measure::Distribution(Column::Dayweek),
    },
    InsightInfo {
        selection: Selection::TimeOfDay,
        key: "Time of Day",
        heading: "Time of Day Analysis",
        description: "This visualization shows the number of traffic accidents by time of day. It helps to highlight when accidents are most frequent.",
        label: "Time of Day",
        title: "Number of Crashes by Time of Day",
        measure: Measure::Distribution(Column::Time),
    },
    InsightInfo {
        selection: Selection::CrashType,
        key: "Crash Type",
        heading: "Crash Type Analysis",
        description: "This visualization shows the number of traffic accidents by type (single vs. multiple). It helps to understand the nature of crashes.",
        label: "Crash Type",
        title: "Number of Crashes by Type",
        measure: Measure::Distribution(Column::CrashType),
    },
    InsightInfo {
        selection: Selection::AgeGroup,
        key: "Age Group",
        heading: "Age Group Involvement",
        description: "This visualization shows the number of traffic accidents by age group. It helps to understand which age groups are most affected.",
        label: "Age Group",
        title: "Number of Crashes by Age Group",
        measure: Measure::Distribution(Column::AgeGroup),
    },
    InsightInfo {
        selection: Selection::HolidayPeriod,
        key: "Holiday Period",
        heading: "Holiday Period Analysis",
        description: "This section highlights the number of traffic accidents during the Christmas and Easter periods.",
        label: "",
        title: "",
        measure: Measure::FlagCounts(&[
            ("Christmas Period", Column::ChristmasPeriod),
            ("Easter Period", Column::EasterPeriod),
        ]),
    },
    InsightInfo {
        selection: Selection::Regional,
        key: "Regional Trends",
        heading: "Regional Crash Trends",
        description: "This visualization shows the number of traffic accidents by region. It helps to understand the distribution of accidents in different regions.",
        label: "Region",
        title: "Number of Crashes by Region",
        measure: Measure::Distribution(Column::RemotenessArea),
    },
    InsightInfo {
        selection: Selection::RoadUser,
        key: "Road User Trends",
        heading: "Trends by Road User",
        description: "This visualization shows the number of traffic accidents by road user type. It helps to understand the involvement of different road users in accidents.",
        label: "Road User",
        title: "Number of Crashes by Road User",
        measure: Measure::Distribution(Column::RoadUser),
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Distribution {
    pub entries: Vec<CategoryCount>,
}

impl Distribution {
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn max_count(&self) -> usize {
        self.entries.iter().map(|e| e.count).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagCount {
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insight {
    Distribution(Distribution),
    FlagCounts(Vec<FlagCount>),
}

/// Every insight, computed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    total_records: usize,
    // Indexed by `Selection as usize`.
    insights: Vec<Insight>,
}

impl Catalog {
    pub fn get(&self, selection: Selection) -> &Insight {
        &self.insights[selection as usize]
    }

    pub fn get_by_key(&self, key: &str) -> Result<&Insight> {
        let selection: Selection = key.parse()?;
        Ok(self.get(selection))
    }

    pub fn total_records(&self) -> usize {
        self.total_records
    }
}

pub fn build_catalog(data: &[AccidentRecord]) -> Catalog {
    let insights = INSIGHTS
        .iter()
        .map(|entry| {
            let insight = compute(entry.measure, data);
            debug!(key = entry.key, "insight computed");
            insight
        })
        .collect();
    info!(records = data.len(), insights = INSIGHTS.len(), "catalog built");
    Catalog {
        total_records: data.len(),
        insights,
    }
}

fn compute(measure: Measure, data: &[AccidentRecord]) -> Insight {
    match measure {
        Measure::Distribution(column) => Insight::Distribution(count_by(data, column)),
        Measure::FlagCounts(flags) => Insight::FlagCounts(
            flags
                .iter()
                .map(|&(label, column)| FlagCount {
                    label,
                    count: count_flag(data, column),
                })
                .collect(),
        ),
    }
}

/// Group records by the exact text of `column` and count each group.
pub fn count_by(data: &[AccidentRecord], column: Column) -> Distribution {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<CategoryCount> = Vec::new();
    for r in data {
        let value = column.value(r);
        match index.get(value) {
            Some(&i) => entries[i].count += 1,
            None => {
                index.insert(value, entries.len());
                entries.push(CategoryCount {
                    category: value.to_string(),
                    count: 1,
                });
            }
        }
    }
    // Stable sort: equal counts stay in first-seen order.
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    Distribution { entries }
}

pub fn count_flag(data: &[AccidentRecord], column: Column) -> usize {
    data.iter().filter(|r| column.value(r) == FLAG_YES).count()
}
