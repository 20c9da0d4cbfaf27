//! Artifact renaming
//!
//! Inserts the batch token into output basenames (`hello.js` becomes
//! `hello-a1b2c3.js`) and keeps sourcemaps aligned: a companion `.map` is
//! renamed in lockstep, its internal `"file"` field is rewritten to the new
//! basename, and the `sourceMappingURL` comment inside the renamed file is
//! pointed at the new map. A missing companion map is a normal state.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{WidgetpackError, WidgetpackResult};
use crate::models::{BuildArtifact, HashedArtifact};
use crate::writer;

/// One renamed output file plus its companion map, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedFile {
    pub path: PathBuf,
    pub map_path: Option<PathBuf>,
}

/// Compute the post-rename path: the token goes before the first extension,
/// so the full `.js.map` chain of a companion stays intact.
pub fn hashed_name(path: &Path, token: &str) -> PathBuf {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    let new_name = match name.split_once('.') {
        Some((stem, rest)) => format!("{stem}-{token}.{rest}"),
        None => format!("{name}-{token}"),
    };

    path.with_file_name(new_name)
}

/// Rename one output file and realign its companion sourcemap
pub fn rename_with_token(path: &Path, token: &str) -> WidgetpackResult<RenamedFile> {
    let new_path = hashed_name(path, token);
    fs::rename(path, &new_path)?;

    let map_path = companion_map(path);
    if !map_path.is_file() {
        return Ok(RenamedFile {
            path: new_path,
            map_path: None,
        });
    }

    let new_map_path = companion_map(&new_path);
    fs::rename(&map_path, &new_map_path)?;

    rewrite_map_file_field(&new_map_path, &basename(&new_path))?;
    rewrite_mapping_url(&new_path, &basename(&map_path), &basename(&new_map_path))?;

    Ok(RenamedFile {
        path: new_path,
        map_path: Some(new_map_path),
    })
}

/// Rename every output of one widget, producing the hashed artifact
pub fn rename_artifact(artifact: &BuildArtifact, token: &str) -> WidgetpackResult<HashedArtifact> {
    let mut hashed = HashedArtifact {
        widget_id: artifact.widget_id.clone(),
        script_path: None,
        style_path: None,
        script_map_path: None,
        style_map_path: None,
    };

    if let Some(script) = &artifact.script_path {
        let renamed = rename_with_token(script, token)?;
        hashed.script_path = Some(renamed.path);
        hashed.script_map_path = renamed.map_path;
    }

    if let Some(style) = &artifact.style_path {
        let renamed = rename_with_token(style, token)?;
        hashed.style_path = Some(renamed.path);
        hashed.style_map_path = renamed.map_path;
    }

    Ok(hashed)
}

fn companion_map(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".map");
    PathBuf::from(name)
}

fn basename(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string()
}

/// Rewrite the sourcemap's self-referencing `"file"` field
fn rewrite_map_file_field(map_path: &Path, file: &str) -> WidgetpackResult<()> {
    let content = fs::read_to_string(map_path)?;
    let mut value: Value =
        serde_json::from_str(&content).map_err(|source| WidgetpackError::SourcemapParse {
            path: map_path.to_path_buf(),
            source,
        })?;

    if let Some(obj) = value.as_object_mut() {
        obj.insert("file".to_string(), Value::String(file.to_string()));
    }

    writer::write_atomic(map_path, &serde_json::to_string(&value).unwrap_or(content))?;
    Ok(())
}

/// Point the `sourceMappingURL` comment at the renamed map so debuggers
/// still auto-resolve the standalone `.js`/`.css` artifact.
fn rewrite_mapping_url(path: &Path, old_map: &str, new_map: &str) -> WidgetpackResult<()> {
    let content = fs::read_to_string(path)?;
    if !content.contains(old_map) {
        return Ok(());
    }
    writer::write_atomic(path, &content.replace(old_map, new_map))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_hashed_name_simple_extension() {
        assert_eq!(
            hashed_name(Path::new("dist/hello.js"), "a1b2c3"),
            PathBuf::from("dist/hello-a1b2c3.js")
        );
    }

    #[test]
    fn test_hashed_name_map_extension_chain() {
        assert_eq!(
            hashed_name(Path::new("dist/hello.js.map"), "a1b2c3"),
            PathBuf::from("dist/hello-a1b2c3.js.map")
        );
    }

    #[test]
    fn test_hashed_name_no_extension() {
        assert_eq!(
            hashed_name(Path::new("dist/hello"), "a1b2c3"),
            PathBuf::from("dist/hello-a1b2c3")
        );
    }

    #[test]
    fn test_rename_without_companion_map() {
        let dir = tempdir().unwrap();
        let script = dir.path().join("hello.js");
        fs::write(&script, "console.log(1);\n").unwrap();

        let renamed = rename_with_token(&script, "a1b2c3").unwrap();

        assert_eq!(renamed.path, dir.path().join("hello-a1b2c3.js"));
        assert!(renamed.map_path.is_none());
        assert!(!script.exists());
        assert!(renamed.path.exists());
    }

    #[test]
    fn test_rename_realigns_companion_map() {
        let dir = tempdir().unwrap();
        let script = dir.path().join("hello.js");
        fs::write(
            &script,
            "console.log(1);\n//# sourceMappingURL=hello.js.map\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("hello.js.map"),
            r#"{"version":3,"file":"hello.js","sources":["index.tsx"],"mappings":""}"#,
        )
        .unwrap();

        let renamed = rename_with_token(&script, "a1b2c3").unwrap();

        let map_path = renamed.map_path.unwrap();
        assert_eq!(map_path, dir.path().join("hello-a1b2c3.js.map"));

        let map: Value = serde_json::from_str(&fs::read_to_string(&map_path).unwrap()).unwrap();
        assert_eq!(map["file"], "hello-a1b2c3.js");
        assert_eq!(map["version"], 3);

        let script_text = fs::read_to_string(&renamed.path).unwrap();
        assert!(script_text.contains("sourceMappingURL=hello-a1b2c3.js.map"));
        assert!(!script_text.contains("sourceMappingURL=hello.js.map"));
    }

    #[test]
    fn test_rename_css_with_map() {
        let dir = tempdir().unwrap();
        let style = dir.path().join("hello.css");
        fs::write(
            &style,
            ".card{}\n/*# sourceMappingURL=hello.css.map */\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("hello.css.map"),
            r#"{"version":3,"file":"hello.css","sources":[],"mappings":""}"#,
        )
        .unwrap();

        let renamed = rename_with_token(&style, "a1b2c3").unwrap();

        assert_eq!(renamed.path, dir.path().join("hello-a1b2c3.css"));
        let css = fs::read_to_string(&renamed.path).unwrap();
        assert!(css.contains("sourceMappingURL=hello-a1b2c3.css.map"));
    }

    #[test]
    fn test_rename_invalid_map_fails() {
        let dir = tempdir().unwrap();
        let script = dir.path().join("hello.js");
        fs::write(&script, "console.log(1);\n").unwrap();
        fs::write(dir.path().join("hello.js.map"), "not json").unwrap();

        let err = rename_with_token(&script, "a1b2c3").unwrap_err();

        assert!(matches!(err, WidgetpackError::SourcemapParse { .. }));
    }

    #[test]
    fn test_rename_artifact_all_outputs() {
        let dir = tempdir().unwrap();
        let script = dir.path().join("hello.js");
        let style = dir.path().join("hello.css");
        fs::write(&script, "console.log(1);\n").unwrap();
        fs::write(&style, ".card{}\n").unwrap();

        let mut artifact = BuildArtifact::new("hello");
        artifact.script_path = Some(script);
        artifact.style_path = Some(style);

        let hashed = rename_artifact(&artifact, "a1b2c3").unwrap();

        assert_eq!(hashed.widget_id, "hello");
        assert_eq!(hashed.script_path, Some(dir.path().join("hello-a1b2c3.js")));
        assert_eq!(hashed.style_path, Some(dir.path().join("hello-a1b2c3.css")));
        assert!(hashed.script_map_path.is_none());
        assert!(hashed.style_map_path.is_none());
    }

    #[test]
    fn test_rename_artifact_style_only() {
        let dir = tempdir().unwrap();
        let style = dir.path().join("banner.css");
        fs::write(&style, ".banner{}\n").unwrap();

        let mut artifact = BuildArtifact::new("banner");
        artifact.style_path = Some(style);

        let hashed = rename_artifact(&artifact, "a1b2c3").unwrap();

        assert!(hashed.script_path.is_none());
        assert_eq!(
            hashed.style_path,
            Some(dir.path().join("banner-a1b2c3.css"))
        );
    }
}
