use std::path::PathBuf;

xflags::xflags! {
    /// Renders a résumé content directory into a single HTML page.
    cmd scribe {
        /// The site root, holding `site.toml` and the content directory.
        /// Defaults to the current directory.
        optional root: PathBuf
        /// Where to write the page, relative to the site root. Overrides
        /// `output` in the settings.
        optional -o, --output path: PathBuf
        /// Read settings from this file instead of `<root>/site.toml`.
        optional -c, --config path: PathBuf
        /// Log more. Repeat for more detail.
        repeated -v, --verbose
    }
}
