//! Relative import specifiers between generated files

use std::collections::BTreeSet;
use std::path::{Component, Path};

/// Named import lines of one generated file
///
/// A name is imported once however many fields refer to it, so self and
/// repeated relations do not produce duplicate identifiers.
pub struct Imports<'a> {
    file: &'a Path,
    seen: BTreeSet<String>,
    lines: String,
}

impl<'a> Imports<'a> {
    pub fn new(file: &'a Path) -> Self {
        Self {
            file,
            seen: BTreeSet::new(),
            lines: String::new(),
        }
    }

    /// Import `name` from `target`; later imports of the same name are dropped
    pub fn add(&mut self, name: &str, target: &Path) {
        if self.seen.insert(name.to_string()) {
            self.lines.push_str(&format!(
                "import {{ {name} }} from \"{}\";\n",
                relative_import(self.file, target)
            ));
        }
    }

    pub fn into_string(self) -> String {
        self.lines
    }
}

/// Module specifier that `from_file` uses to import `to_file`
///
/// Both paths are relative to the same root. The result uses forward
/// slashes, starts with `./` or `../`, and drops the `.ts` extension.
pub fn relative_import(from_file: &Path, to_file: &Path) -> String {
    let from_dir: Vec<Component<'_>> = from_file
        .parent()
        .map(|dir| dir.components().collect())
        .unwrap_or_default();
    let to: Vec<Component<'_>> = to_file.components().collect();

    let common = from_dir
        .iter()
        .zip(&to)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = vec!["..".to_string(); from_dir.len() - common];
    parts.extend(
        to[common..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );

    if let Some(last) = parts.last_mut() {
        if let Some(stem) = last.strip_suffix(".ts") {
            *last = stem.to_string();
        }
    }

    let specifier = parts.join("/");
    if specifier.starts_with("../") {
        specifier
    } else {
        format!("./{specifier}")
    }
}
