//! Discovery and decoding of puzzle images.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use image::RgbaImage;
use rand::{seq::IndexedRandom, Rng};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::PuzzleError;

/// Directory of candidate source images.
#[derive(Debug, Clone)]
pub struct AssetLibrary {
    root: PathBuf,
}

impl AssetLibrary {
    /// Build a library rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory scanned for images.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the directory when missing. Returns `true` if it was created.
    pub fn ensure_exists(&self) -> Result<bool> {
        if self.root.is_dir() {
            return Ok(false);
        }
        fs::create_dir_all(&self.root)
            .with_context(|| format!("failed to create asset directory {}", self.root.display()))?;
        info!(dir = %self.root.display(), "Created asset directory");
        Ok(true)
    }

    /// Every regular, non-hidden file directly inside the directory, sorted by name.
    pub fn candidates(&self) -> Result<Vec<PathBuf>, PuzzleError> {
        let mut files = Vec::new();
        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|source| PuzzleError::AssetDir {
                dir: self.root.clone(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if entry.file_name().to_string_lossy().starts_with('.') {
                debug!(path = %entry.path().display(), "Skipping hidden file");
                continue;
            }
            files.push(entry.into_path());
        }

        Ok(files)
    }

    /// Pick one candidate uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<PathBuf, PuzzleError> {
        let candidates = self.candidates()?;
        candidates
            .choose(rng)
            .cloned()
            .ok_or_else(|| PuzzleError::NoImages {
                dir: self.root.clone(),
            })
    }

    /// Decode `path` into an RGBA buffer.
    pub fn load(path: &Path) -> Result<RgbaImage, PuzzleError> {
        let image = image::open(path).map_err(|source| PuzzleError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(image.into_rgba8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use rand::{rngs::StdRng, SeedableRng};
    use tempfile::tempdir;

    #[test]
    fn creates_missing_directory_once() -> Result<()> {
        let temp = tempdir()?;
        let library = AssetLibrary::new(temp.path().join("pictures"));
        assert!(library.ensure_exists()?);
        assert!(!library.ensure_exists()?);
        assert!(library.root().is_dir());
        Ok(())
    }

    #[test]
    fn lists_visible_files_in_name_order() -> Result<()> {
        let temp = tempdir()?;
        let root = temp.path();
        fs::write(root.join("b.png"), b"x")?;
        fs::write(root.join("a.jpg"), b"x")?;
        fs::write(root.join(".DS_Store"), b"x")?;
        fs::create_dir_all(root.join("nested"))?;
        fs::write(root.join("nested").join("c.png"), b"x")?;

        let library = AssetLibrary::new(root);
        let names: Vec<_> = library
            .candidates()?
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.png"]);
        Ok(())
    }

    #[test]
    fn empty_directory_reports_no_images() -> Result<()> {
        let temp = tempdir()?;
        let library = AssetLibrary::new(temp.path());
        let mut rng = StdRng::seed_from_u64(1);
        let err = library.choose(&mut rng).unwrap_err();
        assert!(matches!(err, PuzzleError::NoImages { .. }));
        Ok(())
    }

    #[test]
    fn missing_directory_is_reported() {
        let library = AssetLibrary::new("/definitely/not/a/real/picture/dir");
        let err = library.candidates().unwrap_err();
        assert!(matches!(err, PuzzleError::AssetDir { .. }));
    }

    #[test]
    fn decodes_png_and_rejects_garbage() -> Result<()> {
        let temp = tempdir()?;
        let good = temp.path().join("good.png");
        RgbaImage::from_pixel(6, 4, Rgba([10, 20, 30, 255])).save(&good)?;
        let bad = temp.path().join("bad.png");
        fs::write(&bad, b"definitely not a png")?;

        let image = AssetLibrary::load(&good)?;
        assert_eq!(image.dimensions(), (6, 4));
        assert_eq!(image.get_pixel(0, 0), &Rgba([10, 20, 30, 255]));

        let err = AssetLibrary::load(&bad).unwrap_err();
        assert!(matches!(err, PuzzleError::Decode { .. }));
        Ok(())
    }
}
