use crate::html::escape;
use crate::labels::LabelMap;
use crate::record::{Canonical, Engagement, Fields};
use crate::render::detail_item;

/// A collapsible engagement: a summary line with period, organisation, and
/// role, and details with the remaining fields.
pub fn engagement(engagement: &Engagement, labels: &LabelMap) -> String {
    let mut fields = Fields::new(&engagement.record);
    let [periode, organisatie, functie, werkzaamheden, prestaties, trefwoorden] =
        Canonical::ALL.map(|canonical| fields.extract(canonical));

    let mut html = String::from(
        "<div class=\"engagement-item\">\
         <div class=\"engagement-summary\" role=\"button\" tabindex=\"0\" aria-expanded=\"false\">\
         <span class=\"engagement-toggle\">▶</span>\
         <div class=\"engagement-summary-content\">"
    );

    let summary = [
        ("engagement-period", periode),
        ("engagement-org", organisatie),
        ("engagement-role", functie),
    ];

    for (class, value) in summary {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            html.push_str(&format!("<span class=\"{class}\">{}</span>", escape(value)));
        }
    }

    html.push_str("</div></div><div class=\"engagement-details\">");
    let details = [
        (Canonical::Werkzaamheden, werkzaamheden),
        (Canonical::Prestaties, prestaties),
        (Canonical::Trefwoorden, trefwoorden),
    ];

    for (canonical, value) in details {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            html.push_str(&detail_item(canonical.label(), value));
        }
    }

    for (key, value) in fields.remaining().filter(|(_, v)| !v.is_empty()) {
        html.push_str(&detail_item(&labels.resolve(key), value));
    }

    html.push_str("</div></div>");
    html
}

/// Every engagement, in the given order.
pub fn engagements(engagements: &[Engagement], labels: &LabelMap) -> String {
    engagements.iter()
        .map(|e| engagement(e, labels))
        .collect()
}
