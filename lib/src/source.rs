use std::fs;
use std::sync::Arc;
use std::path::Path;
use std::fmt::Debug;

use crate::error::{Chainable, Result};
use crate::fstree::Entry;

/// Something content can be read from.
pub trait Source: Debug {
    fn read_bytes(self) -> Result<Vec<u8>>;

    fn path(&self) -> Option<&Path> {
        None
    }

    /// Reads the source as UTF-8 text. Invalid sequences are replaced.
    fn read_text(self) -> Result<Arc<str>> where Self: Sized {
        let bytes = self.read_bytes()?;
        Ok(match String::from_utf8(bytes) {
            Ok(string) => string.into(),
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into(),
        })
    }
}

impl Source for &str {
    fn read_bytes(self) -> Result<Vec<u8>> {
        Ok(self.as_bytes().to_vec())
    }
}

impl Source for &Path {
    fn read_bytes(self) -> Result<Vec<u8>> {
        fs::read(self).chain(error! {
            "failed to open file for reading",
            "file path" => self.display()
        })
    }

    fn path(&self) -> Option<&Path> {
        Some(self)
    }
}

impl Source for &Entry {
    fn read_bytes(self) -> Result<Vec<u8>> {
        self.path.as_ref().read_bytes()
    }

    fn path(&self) -> Option<&Path> {
        Some(&*self.path)
    }
}

/// Something rendered output can be written to.
pub trait Sink: Debug {
    fn write_str(&self, value: &str) -> Result<()>;
}

impl Sink for &Path {
    fn write_str(&self, value: &str) -> Result<()> {
        if let Some(parent) = self.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).chain_with(|| error! {
                "failed to create output directory",
                "directory" => parent.display()
            })?;
        }

        fs::write(self, value).chain(error! {
            "failed to open/create file for writing",
            "file path" => self.display()
        })
    }
}

impl Sink for std::path::PathBuf {
    fn write_str(&self, value: &str) -> Result<()> {
        self.as_path().write_str(value)
    }
}

/// A serde data format that settings can be read from.
pub trait Format: Sized {
    type Error: Into<crate::error::Error>;

    fn from_str<T: serde::de::DeserializeOwned>(string: &str) -> Result<T, Self::Error>;

    fn read<I: Source, T: serde::de::DeserializeOwned>(input: I) -> Result<T> {
        let path = input.path().map(|p| p.display().to_string());
        let text = input.read_text()?;
        Self::from_str(&text)
            .chain_with(|| error! {
                "failed to parse settings",
                "file path" => path.as_deref().unwrap_or("<string>"),
            })
    }
}

macro_rules! impl_format {
    ($name:ident : $func:expr, $E:ty) => (
        pub struct $name;

        impl Format for $name {
            type Error = $E;

            fn from_str<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, $E> {
                $func(s)
            }
        }
    );
}

impl_format!(Toml: toml::from_str, toml::de::Error);
