//! Thin wrappers over the host filesystem for [`Path`].
//!
//! The boolean queries collapse every stat error to `false`, so "missing" and
//! "inaccessible" look the same through them. Everything else returns the
//! host error to the caller.

use log::{debug, trace};
use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::Path as StdPath;

use super::{lexical, Path};
use crate::entries::Entries;
use crate::error::{Error, Result};
use crate::ext::PathExt;

impl Path {
    fn std_path(&self) -> &StdPath {
        StdPath::new(self.as_str())
    }

    pub fn exists(&self) -> bool {
        fs::metadata(self.std_path()).is_ok()
    }

    pub fn is_dir(&self) -> bool {
        fs::metadata(self.std_path()).map(|meta| meta.is_dir()).unwrap_or(false)
    }

    /// `true` for anything that exists and is not a directory.
    pub fn is_file(&self) -> bool {
        fs::metadata(self.std_path()).map(|meta| !meta.is_dir()).unwrap_or(false)
    }

    /// Resolves the path against the current working directory.
    ///
    /// Absolute paths are only cleaned.
    ///
    /// # Returns
    /// * `Ok(Path)` - The absolute, cleaned path
    /// * `Err(Error)` - If the working directory cannot be read or is not valid Unicode
    pub fn absolute(&self) -> Result<Path> {
        if self.std_path().is_absolute() {
            return Ok(Path::new(lexical::clean(self.as_str())));
        }
        let cwd = std::env::current_dir()?;
        Ok(cwd.to_dir_path()?.join([self.as_str()]))
    }

    /// In-place [`Path::absolute`]. The value is unchanged on error.
    pub fn make_absolute(&mut self) -> Result<()> {
        *self = self.absolute()?;
        Ok(())
    }

    /// Creates the directory and any missing ancestors.
    /// Succeeds without doing anything if it is already a directory.
    pub fn create_dir(&self) -> Result<()> {
        if self.is_dir() {
            return Ok(());
        }
        debug!("Creating directory '{}'", self);
        fs::create_dir_all(self.std_path()).map_err(Error::IoError)
    }

    /// Recursively removes the directory.
    /// Succeeds without doing anything if it is not a directory.
    pub fn delete_dir(&self) -> Result<()> {
        if !self.is_dir() {
            return Ok(());
        }
        debug!("Removing directory '{}'", self);
        fs::remove_dir_all(self.std_path()).map_err(Error::IoError)
    }

    /// Creates a new file for writing.
    ///
    /// # Returns
    /// * `Ok(File)` - Handle owned by the caller
    /// * `Err(Error::AlreadyExistsError)` - If a file is already there; nothing is touched
    pub fn create_file(&self) -> Result<File> {
        if self.is_file() {
            return Err(Error::AlreadyExistsError { path: self.to_string() });
        }
        debug!("Creating file '{}'", self);
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.std_path())
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => Error::AlreadyExistsError { path: self.to_string() },
                _ => Error::IoError(e),
            })
    }

    /// Removes the file. Succeeds without doing anything if it is not a file.
    pub fn delete_file(&self) -> Result<()> {
        if !self.is_file() {
            return Ok(());
        }
        debug!("Removing file '{}'", self);
        fs::remove_file(self.std_path()).map_err(Error::IoError)
    }

    /// Opens the file for reading.
    pub fn open_file(&self) -> Result<File> {
        if !self.is_file() {
            return Err(Error::NotFoundError { path: self.to_string(), expected: "file" });
        }
        Ok(File::open(self.std_path())?)
    }

    /// Renames this path to `target` on the host filesystem.
    pub fn rename_to(&self, target: &Path) -> Result<()> {
        debug!("Renaming '{}' to '{}'", self, target);
        fs::rename(self.std_path(), target.std_path()).map_err(Error::IoError)
    }

    /// Lists the direct children of this directory, each joined onto this path.
    ///
    /// Not recursive. Order is whatever the host returns.
    ///
    /// # Returns
    /// * `Ok(Entries)` - One entry per file or subdirectory
    /// * `Err(Error::NotFoundError)` - If this is not a directory
    pub fn entries(&self) -> Result<Entries> {
        if !self.is_dir() {
            return Err(Error::NotFoundError {
                path: self.to_string(),
                expected: "directory",
            });
        }

        let mut entries = Entries::new();
        for dir_entry in fs::read_dir(self.std_path())? {
            let name = dir_entry?.file_name();
            let name = StdPath::new(&name).to_str_checked()?;
            trace!("Found entry '{}' in '{}'", name, self);
            entries.push(self.join([name]));
        }
        debug!("Listed {} entries in '{}'", entries.len(), self);
        Ok(entries)
    }
}

/// Lists the direct children of `path`. See [`Path::entries`].
pub fn entries(path: &Path) -> Result<Entries> {
    path.entries()
}
