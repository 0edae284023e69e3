use crate::html::{escape, linkify};
use crate::record::{CourseGroup, Row};
use crate::render::text_block;

#[derive(Clone, Copy, PartialEq, Eq)]
enum RowStyle {
    Education,
    Certification,
}

fn row_table(rows: &[Row], style: RowStyle) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut html = String::from("<table class='education-table'>");
    for row in rows {
        let name = match row.institute.is_empty() {
            true => escape(&row.name).into_owned(),
            false => format!("{} — {}", escape(&row.name), escape(&row.institute)),
        };

        let (name_class, desc_class) = match style {
            RowStyle::Education => (" class='edu-name'", " class='edu-desc'"),
            RowStyle::Certification => ("", ""),
        };

        html.push_str(&format!(
            "<tr><td class='label'>{}</td><td{name_class}>{name}</td>\
             <td class='edu-place'>{}</td></tr>",
            escape(&row.period),
            escape(&row.place),
        ));

        if !row.elaboration.trim().is_empty() {
            html.push_str(&format!(
                "<tr><td class='label'>&nbsp;</td><td{desc_class} colspan='2'>{}</td></tr>",
                text_block(&row.elaboration)
            ));
        }
    }

    html.push_str("</table>");
    html
}

/// Education rows: `period | name — institute | place`, each followed by its
/// elaboration when there is one.
pub fn educations(rows: &[Row]) -> String {
    row_table(rows, RowStyle::Education)
}

/// Like [`educations()`], without emphasis on the name.
pub fn certifications(rows: &[Row]) -> String {
    row_table(rows, RowStyle::Certification)
}

/// One table per group: the period, then the course names joined with `, `.
pub fn courses(groups: &[CourseGroup]) -> String {
    groups.iter()
        .map(|group| format!(
            "<table class='education-table'><tr><td class='label'>{}</td>\
             <td colspan='2'><div class='tekstblok'>{}</div></td></tr></table>",
            escape(&group.period),
            linkify(&group.items.join(", "))
        ))
        .collect()
}
