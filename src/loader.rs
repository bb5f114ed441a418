use crate::error::{Error, Result};
use crate::types::{AccidentRecord, Column, LoadReport, RawRow};
use crate::util::{format_month, parse_i32_safe};
use csv::ReaderBuilder;
use std::path::Path;
use tracing::{debug, info};

const YEAR_HEADER: &str = "Year";

/// Read the ARDD fatalities CSV into memory.
///
/// Any problem is fatal: a missing required column, a row that does not
/// deserialize, or a Month/Year that is not a real calendar month fails the
/// whole load and no partial table is returned.
pub fn load(path: &Path) -> Result<(Vec<AccidentRecord>, LoadReport)> {
    let mut rdr = ReaderBuilder::new().from_path(path)?;
    check_headers(rdr.headers()?)?;

    let mut data: Vec<AccidentRecord> = Vec::new();
    let mut first_year: Option<i32> = None;
    let mut last_year: Option<i32> = None;

    for (idx, result) in rdr.deserialize::<RawRow>().enumerate() {
        // Row numbers in errors count the header as row 1.
        let row_no = idx + 2;
        let row = result?;

        let year = parse_i32_safe(&row.year).ok_or_else(|| Error::InvalidYear {
            row: row_no,
            value: row.year.clone(),
        })?;
        let month = parse_i32_safe(&row.month)
            .and_then(|m| format_month(m, year))
            .ok_or_else(|| Error::InvalidMonth {
                row: row_no,
                value: row.month.clone(),
            })?;

        first_year = Some(first_year.map_or(year, |y| y.min(year)));
        last_year = Some(last_year.map_or(year, |y| y.max(year)));

        data.push(AccidentRecord {
            state: row.state,
            month,
            year,
            dayweek: row.dayweek,
            time: row.time,
            crash_type: row.crash_type,
            age_group: row.age_group,
            christmas_period: row.christmas_period,
            easter_period: row.easter_period,
            remoteness_area: row.remoteness_area,
            road_user: row.road_user,
        });
    }

    info!(rows = data.len(), path = %path.display(), "dataset loaded");
    let report = LoadReport {
        total_rows: data.len(),
        first_year,
        last_year,
    };
    Ok((data, report))
}

fn check_headers(headers: &csv::StringRecord) -> Result<()> {
    debug!(columns = headers.len(), "checking header row");
    let required = Column::ALL
        .iter()
        .map(|c| c.header())
        .chain(std::iter::once(YEAR_HEADER));
    for name in required {
        if !headers.iter().any(|h| h == name) {
            return Err(Error::MissingColumn(name.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "Crash ID,State,Month,Year,Dayweek,Time,Crash Type,Age Group,\
Christmas Period,Easter Period,National Remoteness Areas,Road User";

    fn write_csv(body: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "{}", HEADER).unwrap();
        write!(f, "{}", body).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn test_load_pads_month_and_keeps_values_verbatim() {
        let f = write_csv(
            "20231001,NSW,3,2023,Friday,07:30,Single,17_to_25,No,Yes,Major Cities of Australia,Driver\n\
             20231002,Vic,11,2022,Sunday,22:00,Multiple, 26_to_39,Yes,No,Inner Regional Australia,Pedestrian\n",
        );
        let (data, report) = load(f.path()).unwrap();

        assert_eq!(data.len(), 2);
        assert_eq!(report.total_rows, 2);
        assert_eq!(report.first_year, Some(2022));
        assert_eq!(report.last_year, Some(2023));
        assert_eq!(data[0].month, "03");
        assert_eq!(data[1].month, "11");
        assert_eq!(data[0].year, 2023);
        // Leading space is part of the category.
        assert_eq!(data[1].age_group, " 26_to_39");
        assert_eq!(data[1].remoteness_area, "Inner Regional Australia");
    }

    #[test]
    fn test_load_header_only_is_empty_table() {
        let f = write_csv("");
        let (data, report) = load(f.path()).unwrap();
        assert!(data.is_empty());
        assert_eq!(report.total_rows, 0);
        assert_eq!(report.first_year, None);
    }

    #[test]
    fn test_load_missing_column_fails() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(
            f,
            "State,Month,Year,Dayweek,Time,Crash Type,Age Group,Christmas Period,Easter Period,Road User"
        )
        .unwrap();
        writeln!(f, "NSW,1,2020,Monday,10:00,Single,0_to_16,No,No,Driver").unwrap();
        f.flush().unwrap();

        match load(f.path()) {
            Err(Error::MissingColumn(name)) => assert_eq!(name, "National Remoteness Areas"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_load_bad_month_fails() {
        let f = write_csv(
            "1,NSW,1,2020,Monday,10:00,Single,0_to_16,No,No,Remote Australia,Driver\n\
             2,NSW,13,2020,Monday,10:00,Single,0_to_16,No,No,Remote Australia,Driver\n",
        );
        match load(f.path()) {
            Err(Error::InvalidMonth { row, value }) => {
                assert_eq!(row, 3);
                assert_eq!(value, "13");
            }
            other => panic!("expected InvalidMonth, got {:?}", other),
        }
    }

    #[test]
    fn test_load_unparseable_year_fails() {
        let f = write_csv("1,NSW,4,twenty,Monday,10:00,Single,0_to_16,No,No,Remote Australia,Driver\n");
        assert!(matches!(load(f.path()), Err(Error::InvalidYear { row: 2, .. })));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, Error::Io(_) | Error::Csv(_)));
    }
}
