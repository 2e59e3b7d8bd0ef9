// src/node/config.rs
// Pure updates to the node's tahoe.cfg text

/// Section name of the magic-folder stanza
pub const MAGIC_FOLDER_SECTION: &str = "magic_folder";

/// Render the `[magic_folder]` stanza enabling `local_dir`
pub fn magic_folder_stanza(local_dir: &str) -> String {
    format!(
        "[{}]\nenabled = True\nlocal.directory = {}\n",
        MAGIC_FOLDER_SECTION, local_dir
    )
}

/// Section header name if `line` is `[name]`
fn section_name(line: &str) -> Option<&str> {
    let line = line.trim();
    line.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .map(str::trim)
}

/// Return `current` with magic-folder enabled for `local_dir`.
///
/// An existing `[magic_folder]` section is replaced in place. Otherwise the
/// stanza is appended at the end of the file.
pub fn enable_magic_folder(current: &str, local_dir: &str) -> String {
    let stanza = magic_folder_stanza(local_dir);
    let lines: Vec<&str> = current.split_inclusive('\n').collect();

    let start = lines
        .iter()
        .position(|l| section_name(l) == Some(MAGIC_FOLDER_SECTION));

    match start {
        Some(start) => {
            let end = lines[start + 1..]
                .iter()
                .position(|l| section_name(l).is_some())
                .map(|i| start + 1 + i)
                .unwrap_or(lines.len());

            let mut out: String = lines[..start].concat();
            out.push_str(&stanza);
            if end < lines.len() {
                out.push('\n');
                out.push_str(&lines[end..].concat());
            }
            out
        }
        None => {
            let mut out = current.to_string();
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(&stanza);
            out
        }
    }
}
