//! A toolkit for generating a static résumé page.
//!
//! # Overview
//!
//! vitae reads a directory of loosely structured text files, the way people
//! actually keep their CV, and renders them into one self-contained HTML
//! document: images are embedded, the stylesheet is linked, and the page is
//! stamped with the time it was generated.
//!
//! A content directory looks like this:
//!
//! ```text
//! content/
//! ├── personal-data.txt      Naam|Jan de Vries
//! ├── urls-contact.txt       linkedin|linkedin.com/in/jan
//! ├── educations.txt         2010 - 2014|Bachelor|Hogeschool Utrecht|Utrecht
//! ├── certifications.txt     2021|CKA|CNCF
//! ├── courses.txt            2020|Kafka|Kubernetes
//! ├── courses-short.txt
//! ├── blocks.txt             engagements|Werkervaring
//! ├── blocks/
//! │   └── personal-text.txt
//! ├── engagements/
//! │   └── opdracht_2019_2021.txt
//! └── pictures/
//!     └── profile.jpg
//! ```
//!
//! ## Generation
//!
//! 1. The site root is snapshotted into an [`FsTree`](fstree::FsTree) and the
//!    required inputs are checked ([`Site::discover()`](site::Site::discover)).
//! 2. Every content file is parsed into [`record`]s and table rows, and the
//!    display [`labels`] are built.
//! 3. The [`blocks`] configuration decides which sections appear, in order.
//!    Each section is produced by a [`render`]er or read as free text.
//! 4. The sections are placed into a page shell by the [`templating`] engine
//!    and written out.

#[macro_use]
pub mod error;
pub mod util;
pub mod fstree;
pub mod source;
pub mod config;
pub mod record;
pub mod labels;
pub mod html;
pub mod render;
pub mod blocks;
pub mod templating;
pub mod site;

pub use site::{Content, Site};
pub use config::Settings;

#[doc(hidden)]
pub use tracing;
