use std::path::{Path, PathBuf};

/// Split a channel token like `Xrotation` into its (kind, axis) pieces: (`rot`, `X`).
/// Works on chars, so short or odd tokens just give shorter pieces.
pub(crate) fn __split_channel_token(token: &str) -> (String, String) {
    let axis: String = token.chars().take(1).collect();
    let kind: String = token.chars().skip(1).take(3).collect();
    (kind, axis)
}

/// Case-insensitive extension check, `expected` without the dot.
pub(crate) fn __has_extension(path: &Path, expected: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(expected))
        .unwrap_or(false)
}

/// `dir/name.bvh` -> `dir/name.csv`
pub fn csv_path_for(bvh_path: &Path) -> PathBuf {
    bvh_path.with_extension("csv")
}

/// `any/dir/name.csv` -> `<output_dir>/name.bvh`
pub fn bvh_path_for(csv_path: &Path, output_dir: &Path) -> PathBuf {
    let mut file_name = csv_path
        .file_stem()
        .map(|stem| stem.to_os_string())
        .unwrap_or_default();
    file_name.push(".bvh");
    output_dir.join(file_name)
}
