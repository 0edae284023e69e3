//! HTML fragments for each kind of content.
//!
//! Every renderer is a pure function of its parsed input, the label map, and
//! any embedded image. Renderers return an empty string when there is nothing
//! to show; the page assembler still emits the surrounding section.

pub mod image;
mod personal;
mod tables;
mod engagement;
mod contact;

pub use image::{Image, ImageKind};
pub use personal::personal;
pub use tables::{educations, certifications, courses};
pub use engagement::{engagement, engagements};
pub use contact::contact;

use crate::html::{escape, format_value};

/// `<div class='tekstblok'>…</div>` around a formatted value.
pub fn text_block(value: &str) -> String {
    format!("<div class='tekstblok'>{}</div>", format_value(value))
}

/// A label and its formatted value, as shown in engagement details.
fn detail_item(label: &str, value: &str) -> String {
    format!(
        "<div class=\"engagement-detail-item\"><div class=\"detail-label\">{}</div>\
         <div class=\"tekstblok\">{}</div></div>",
        escape(label),
        format_value(value)
    )
}
