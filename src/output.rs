use crate::insights::{Distribution, FlagCount, Insight, InsightInfo, COUNT_LABEL};
use crate::util::format_int;
use tabled::{builder::Builder, settings::Style};

const BAR_WIDTH: usize = 40;

pub const DATA_SOURCE_NOTE: &str = "Data Source: Australian Road Deaths Database (ARDD)
Bureau of Infrastructure and Transport Research Economics
The Australian Road Deaths Database provides basic details of road transport crash \
fatalities in Australia as reported by the police each month to the State and Territory \
road safety authorities. Road deaths from recent months are preliminary and the series \
is subject to revision.";

/// Render one insight for the console. Dispatch is on the shape of the
/// insight only; the info row supplies the wording.
pub fn render_insight(info: &InsightInfo, insight: &Insight) -> String {
    let mut out = format!("### {}\n{}\n\n", info.heading, info.description);
    match insight {
        Insight::Distribution(dist) => {
            out.push_str(info.title);
            out.push_str("\n\n");
            out.push_str(&render_distribution(info.label, dist));
        }
        Insight::FlagCounts(counts) => out.push_str(&render_flag_counts(counts)),
    }
    out
}

pub fn render_distribution(label: &str, dist: &Distribution) -> String {
    if dist.is_empty() {
        return "(no rows)\n".to_string();
    }
    let mut builder = Builder::default();
    builder.push_record([label.to_string(), COUNT_LABEL.to_string()]);
    for e in &dist.entries {
        builder.push_record([e.category.clone(), format_int(e.count)]);
    }
    let table_str = builder.build().with(Style::markdown()).to_string();
    format!("{}\n\n{}", table_str, bar_chart(dist, BAR_WIDTH))
}

/// Horizontal bar chart scaled so the largest count fills `width` cells.
/// Any non-zero count gets at least one cell.
pub fn bar_chart(dist: &Distribution, width: usize) -> String {
    let max = dist.max_count();
    if max == 0 {
        return String::new();
    }
    let label_w = dist
        .entries
        .iter()
        .map(|e| e.category.chars().count())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for e in &dist.entries {
        let cells = (e.count * width + max - 1) / max;
        out.push_str(&format!(
            "{:<label_w$} | {} {}\n",
            e.category,
            "█".repeat(cells),
            format_int(e.count),
            label_w = label_w
        ));
    }
    out
}

pub fn render_flag_counts(counts: &[FlagCount]) -> String {
    counts
        .iter()
        .map(|c| {
            format!(
                "Number of Crashes during {}: {}\n",
                c.label,
                format_int(c.count)
            )
        })
        .collect()
}
