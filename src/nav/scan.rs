//! Content-tree scan producing nav paths.

use anyhow::{Context, Result, ensure};
use jwalk::WalkDir;
use std::path::Path;

/// Content page extensions recognized by the docs theme.
const CONTENT_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Scan `content_dir` for content files and map them to site paths.
///
/// `content/Overview/Introduction.md` becomes `/Overview/Introduction`.
/// With `trailing_slash`, a `/` is appended to every path.
pub fn scan_content_paths(content_dir: &Path, trailing_slash: bool) -> Result<Vec<String>> {
    ensure!(
        content_dir.is_dir(),
        "content directory '{}' not found",
        content_dir.display()
    );

    let mut paths: Vec<String> = WalkDir::new(content_dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            Path::new(&e.file_name())
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| CONTENT_EXTENSIONS.contains(&ext))
        })
        .map(|e| {
            let path = e.path();
            site_path(&path, content_dir, trailing_slash)
                .with_context(|| format!("content file '{}' outside content dir", path.display()))
        })
        .collect::<Result<_>>()?;

    paths.sort_unstable();
    paths.dedup();
    Ok(paths)
}

/// Map a content file to its site path.
fn site_path(file: &Path, content_dir: &Path, trailing_slash: bool) -> Result<String> {
    let relative = file.strip_prefix(content_dir)?;

    let mut out = String::new();
    let without_ext = relative.with_extension("");
    for component in without_ext.components() {
        out.push('/');
        out.push_str(&component.as_os_str().to_string_lossy());
    }
    if trailing_slash {
        out.push('/');
    }
    Ok(out)
}
