//! Keeps `tests/unit` in step with `src`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Entry points and module declaration files have no unit test counterpart
    fn needs_counterpart(relative_path: &str) -> bool {
        relative_path != "main.rs" && relative_path != "lib.rs" && !relative_path.ends_with("mod.rs")
    }

    fn relative_paths(base: &Path) -> BTreeSet<String> {
        let mut paths = BTreeSet::new();
        if let Err(error) = collect_relative_paths(base, base, &mut paths) {
            assert!(!base.exists(), "Failed to read {}: {error}", base.display());
        }
        paths
    }

    fn collect_relative_paths(
        dir: &Path,
        base: &Path,
        paths: &mut BTreeSet<String>,
    ) -> Result<(), io::Error> {
        for entry_result in fs::read_dir(dir)? {
            let path = entry_result?.path();
            let relative_path = path
                .strip_prefix(base)
                .map_err(|_strip_error| io::Error::other("Failed to strip prefix"))?
                .to_string_lossy()
                .to_string();

            if path.is_dir() {
                paths.insert(relative_path);
                collect_relative_paths(&path, base, paths)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative_path);
            }
        }
        Ok(())
    }

    #[test]
    fn test_all_src_files_have_unit_tests() {
        let src_paths = relative_paths(Path::new(SRC_DIR));
        let unit_paths = relative_paths(Path::new(UNIT_DIR));

        let missing: Vec<String> = src_paths
            .iter()
            .filter(|path| needs_counterpart(path) && !unit_paths.contains(*path))
            .map(|path| format!("  - src/{path} -> {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let src_paths = relative_paths(Path::new(SRC_DIR));
        let unit_paths = relative_paths(Path::new(UNIT_DIR));

        let orphaned: Vec<String> = unit_paths
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src_paths.contains(*path))
            .map(|path| format!("  - {UNIT_DIR}/{path} -> src/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit tests without a source file:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let tests_dir = Path::new("tests");
        let empty: Vec<String> = relative_paths(tests_dir)
            .into_iter()
            .filter(|path| {
                Path::new(path).extension().and_then(|ext| ext.to_str()) == Some("rs")
                    && !path.ends_with("mod.rs")
            })
            .filter(|path| {
                fs::read_to_string(tests_dir.join(path))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|path| format!("  - tests/{path}"))
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] functions:\n{}",
            empty.join("\n")
        );
    }
}
