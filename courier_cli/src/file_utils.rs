use std::path::{Path, PathBuf};

const INPUT_PREFIX: &str = "input";
const OUTPUT_PREFIX: &str = "output";

/// Every file below `folder_path`, sorted.
pub fn read_folder(folder_path: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder_path)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        } else if path.is_dir() {
            files.extend(read_folder(&path)?);
        }
    }

    files.sort();

    Ok(files)
}

/// Report file name for a network file: a leading "input" becomes "output"
/// (`inputPS3.txt` -> `outputPS3.txt`), otherwise `<stem>.route.txt`.
pub fn default_output_file_name(input: &Path) -> String {
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    if let Some(rest) = file_name.strip_prefix(INPUT_PREFIX)
        && !rest.is_empty()
    {
        return format!("{OUTPUT_PREFIX}{rest}");
    }

    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("route"));

    format!("{stem}.route.txt")
}

/// Report path next to the network file.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_file_name(default_output_file_name(input))
}

/// Writes `content` to `path`, creating missing parent folders.
pub fn write_file(path: &Path, content: &[u8]) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, content)
}
