use std::path::{Path, PathBuf};
use std::{fs, io};

pub const INPUT_EXT: &str = "txt";
pub const EXPECTED_EXT: &str = "out";

/// An input file and the output it must produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub name: String,
    pub input: PathBuf,
    pub expected: PathBuf,
}

pub fn read_file<P: AsRef<Path>>(file_name: P) -> String {
    fs::read_to_string(&file_name)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", file_name.as_ref().display()))
}

/// Finds files under `root` with extension `ext`, returned without it.
pub fn find(root: &Path, ext: &str) -> io::Result<Vec<PathBuf>> {
    let mut res = Vec::new();
    let wanted = ext.trim_start_matches('.');

    fn walk(dir: &Path, wanted: &str, out: &mut Vec<PathBuf>) -> io::Result<()> {
        for x in fs::read_dir(dir)? {
            let path = x?.path();
            if path.is_dir() {
                walk(&path, wanted, out)?;
            } else if path.extension().and_then(|s| s.to_str()) == Some(wanted) {
                out.push(path.with_extension(""));
            }
        }
        Ok(())
    }

    walk(root, wanted, &mut res)?;
    res.sort();
    Ok(res)
}

/// Every `*.txt` under `root` that has a matching `*.out`.
pub fn fixtures(root: &Path) -> io::Result<Vec<Fixture>> {
    Ok(find(root, INPUT_EXT)?
        .into_iter()
        .filter_map(|base| {
            let expected = base.with_extension(EXPECTED_EXT);
            if !expected.is_file() {
                return None;
            }
            let name = base
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            Some(Fixture {
                name,
                input: base.with_extension(INPUT_EXT),
                expected,
            })
        })
        .collect())
}
