//! Positional, `|`-separated tables.

use indexmap::IndexMap;

use crate::util::{has_pipe, is_attribute_header};

/// An education or certification line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Row {
    pub period: String,
    pub name: String,
    pub institute: String,
    pub place: String,
    pub elaboration: String,
}

/// Courses sharing a period.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CourseGroup {
    pub period: String,
    pub items: Vec<String>,
}

/// The non-blank, non-header lines of `text`, split into trimmed cells.
pub fn cells(text: &str) -> impl Iterator<Item = Vec<&str>> {
    text.lines()
        .filter(|line| !line.trim().is_empty() && !is_attribute_header(line))
        .map(|line| line.split('|').map(str::trim).collect())
}

fn cell(cells: &[&str], i: usize) -> String {
    cells.get(i).copied().unwrap_or_default().to_string()
}

impl Row {
    /// `period|name|institute|place|elaboration`, missing trailing cells
    /// empty.
    pub fn positional(cells: &[&str]) -> Row {
        Row {
            period: cell(cells, 0),
            name: cell(cells, 1),
            institute: cell(cells, 2),
            place: cell(cells, 3),
            elaboration: cell(cells, 4),
        }
    }

    /// Like [`Row::positional()`], except for the legacy three-cell form.
    pub fn education(cells: &[&str]) -> Row {
        // Legacy: exactly three cells is `period|name|elaboration`.
        if cells.len() == 3 {
            return Row {
                period: cell(cells, 0),
                name: cell(cells, 1),
                elaboration: cell(cells, 2),
                ..Row::default()
            };
        }

        Row::positional(cells)
    }

    /// `year|name|organisation`. Never uses the legacy three-cell form.
    pub fn certification(cells: &[&str]) -> Row {
        Row::positional(cells)
    }
}

pub fn parse_educations(text: &str) -> Vec<Row> {
    cells(text).map(|cells| Row::education(&cells)).collect()
}

pub fn parse_certifications(text: &str) -> Vec<Row> {
    cells(text).map(|cells| Row::certification(&cells)).collect()
}

/// `period|course|course…` lines, merged by period in first-seen order.
pub fn parse_courses(text: &str) -> Vec<CourseGroup> {
    let mut groups: IndexMap<&str, Vec<String>> = IndexMap::new();
    for cells in cells(text) {
        let (period, items) = cells.split_first().map_or(("", &[][..]), |(p, i)| (*p, i));
        groups.entry(period)
            .or_default()
            .extend(items.iter().filter(|i| !i.is_empty()).map(|i| i.to_string()));
    }

    groups.into_iter()
        .map(|(period, items)| CourseGroup { period: period.into(), items })
        .collect()
}

/// `period|course|course…` lines, one group per line. Lines without a `|`
/// are collected into a final group with an empty period.
pub fn parse_short_courses(text: &str) -> Vec<CourseGroup> {
    let mut groups = vec![];
    let mut loose = vec![];
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || is_attribute_header(line) {
            continue;
        }

        if !has_pipe(line) {
            loose.push(line.to_string());
            continue;
        }

        let mut cells = line.split('|').map(str::trim);
        let period = cells.next().unwrap_or_default().to_string();
        let items = cells.filter(|i| !i.is_empty()).map(String::from).collect();
        groups.push(CourseGroup { period, items });
    }

    if !loose.is_empty() {
        groups.push(CourseGroup { period: String::new(), items: loose });
    }

    groups
}

#[cfg(test)]
mod table_tests {
    use super::*;

    #[test]
    fn three_cell_education_is_elaboration() {
        let rows = parse_educations("2010 - 2014|Bachelor Informatica|Afstudeerrichting security");
        assert_eq!(rows, [Row {
            period: "2010 - 2014".into(),
            name: "Bachelor Informatica".into(),
            elaboration: "Afstudeerrichting security".into(),
            ..Row::default()
        }]);
    }

    #[test]
    fn education_cells_are_positional_otherwise() {
        let text = "`period`|`name`|`institute`|`place`|`elaboration`\n\
                    2014|Master|TU Delft|Delft\n\
                    \n\
                    2008|VWO";
        let rows = parse_educations(text);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].institute, "TU Delft");
        assert_eq!(rows[0].place, "Delft");
        assert_eq!(rows[0].elaboration, "");
        assert_eq!(rows[1].name, "VWO");
        assert_eq!(rows[1].institute, "");
    }

    #[test]
    fn certifications_keep_the_organisation() {
        let rows = parse_certifications("2021|CKA|CNCF");
        assert_eq!(rows[0].institute, "CNCF");
        assert_eq!(rows[0].elaboration, "");
    }

    #[test]
    fn courses_group_by_first_seen_period() {
        let groups = parse_courses("2020|Kafka\n2019|Rust|Go\n2020|Kubernetes||\n");
        assert_eq!(groups, [
            CourseGroup { period: "2020".into(), items: vec!["Kafka".into(), "Kubernetes".into()] },
            CourseGroup { period: "2019".into(), items: vec!["Rust".into(), "Go".into()] },
        ]);
    }

    #[test]
    fn short_courses_keep_lines_apart() {
        let groups = parse_short_courses("2020|Kafka\n2020|Scrum\nPresenteren\nSchrijven");
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].items, ["Kafka"]);
        assert_eq!(groups[1].items, ["Scrum"]);
        assert_eq!(groups[2].period, "");
        assert_eq!(groups[2].items, ["Presenteren", "Schrijven"]);
    }
}
