use std::path::{Path, PathBuf};

/// Resolves template background images from a local asset directory.
///
/// Presence is a plain filesystem check rather than an open-and-catch: the
/// renderer branches on the lookup result, and a missing background degrades
/// to an in-page warning instead of failing the request.
#[derive(Debug, Clone)]
pub struct BackgroundAssets {
    dir: PathBuf,
}

/// Outcome of resolving a page background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackgroundLookup {
    Available(PathBuf),
    Missing { filename: String },
}

impl BackgroundAssets {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Look up the background image for the given page number.
    pub fn page_background(&self, page: u32) -> BackgroundLookup {
        let filename = page_filename(page);
        let path = self.dir.join(&filename);
        if path.is_file() {
            BackgroundLookup::Available(path)
        } else {
            BackgroundLookup::Missing { filename }
        }
    }
}

/// Template backgrounds are stored as numbered page images.
fn page_filename(page: u32) -> String {
    format!("{page}.jpg")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("gsp-cert-assets-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    #[test]
    fn reports_missing_background_by_filename() {
        let dir = scratch_dir("missing");
        let assets = BackgroundAssets::new(&dir);
        assert_eq!(
            assets.page_background(1),
            BackgroundLookup::Missing {
                filename: "1.jpg".to_string()
            }
        );
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn finds_existing_background() {
        let dir = scratch_dir("present");
        let path = dir.join("1.jpg");
        fs::write(&path, b"not really a jpeg").expect("write placeholder");

        let assets = BackgroundAssets::new(&dir);
        assert_eq!(assets.page_background(1), BackgroundLookup::Available(path));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn pages_resolve_to_numbered_filenames() {
        assert_eq!(page_filename(1), "1.jpg");
        assert_eq!(page_filename(2), "2.jpg");
    }
}
