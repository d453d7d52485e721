//! One generation run: glob, scan, build, write

use crate::config::GenerateOptions;
use crate::nav::{build_nav, NavTemplate, NavTree};
use crate::render::{write_nav_yaml, write_slug_map, RenderError};
use crate::scanner::{audit, scan, NamingConvention, ScanError, Skeleton};
use anyhow::{bail, Context, Result};
use glob::glob;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// What a run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Number of command files found
    pub commands: usize,

    /// Slug map file, if one was written
    pub slugmap: Option<PathBuf>,

    /// Navigation file, `None` on a dry run
    pub command_navs: Option<PathBuf>,
}

/// Naming convention for the configured docs root and suffix
pub fn convention(options: &GenerateOptions) -> Result<NamingConvention> {
    Ok(NamingConvention::new(options.docs_root(), options.command_filename_endswith.clone())?)
}

/// Content files matching the configured glob, sorted lexicographically
///
/// `glob` never yields entries whose names are not valid UTF-8.
pub fn collect_files(options: &GenerateOptions) -> Result<Vec<String>> {
    if !options.docs_dir.is_dir() {
        bail!("Docs directory not found: {}", options.docs_dir.display());
    }
    if options.docs_dir.to_str().is_none() {
        bail!("Docs directory is not valid UTF-8: {}", options.docs_dir.display());
    }

    let pattern = options.content_glob();
    let mut files = Vec::new();
    for entry in glob(&pattern).with_context(|| format!("Invalid content pattern '{}'", pattern))? {
        let path = entry.with_context(|| format!("Failed to read a match of '{}'", pattern))?;
        if !path.is_file() {
            continue;
        }
        match path.into_os_string().into_string() {
            Ok(file) => files.push(file),
            Err(raw) => bail!("Content file name is not valid UTF-8: {}", Path::new(&raw).display()),
        }
    }
    files.sort();

    Ok(files)
}

/// Collect and scan the content files
///
/// Finding no command file at all is an error: it means the docs root or
/// the pattern is wrong.
pub fn skeleton(options: &GenerateOptions) -> Result<Skeleton> {
    let files = collect_files(options)?;
    let skeleton = scan(&files, &convention(options)?)?;

    if skeleton.entries.is_empty() {
        return Err(ScanError::NoCommandFiles(options.content_glob()).into());
    }

    Ok(skeleton)
}

/// Every naming problem among the content files
pub fn check(options: &GenerateOptions) -> Result<(usize, Vec<ScanError>)> {
    let files = collect_files(options)?;
    let convention = convention(options)?;
    let candidates = files.iter().filter(|f| convention.is_candidate(f)).count();

    let mut problems = audit(&files, &convention);
    if candidates == 0 {
        problems.push(ScanError::NoCommandFiles(options.content_glob()));
    }

    Ok((candidates, problems))
}

/// Run the whole pipeline
///
/// The slug map is written whenever `create_slugmap` is set. On a dry run the
/// navigation is rendered to `console` instead of its file.
pub fn generate<W: Write>(options: &GenerateOptions, console: &mut W) -> Result<Report> {
    let skeleton = skeleton(options)?;
    let tree = build_nav(skeleton.command_navs.clone(), &NavTemplate::default());

    let mut report = Report { commands: skeleton.entries.len(), slugmap: None, command_navs: None };

    if options.create_slugmap {
        let path = options.slugmap_path();
        write_artifact(&path, |out| write_slug_map(&skeleton.slug_map, out))?;
        report.slugmap = Some(path);
    }

    if options.dry_run {
        write_nav_yaml(&tree, console)?;
        console.flush()?;
        return Ok(report);
    }

    let path = options.command_navs_path();
    write_nav(&tree, &path)?;
    report.command_navs = Some(path);

    Ok(report)
}

fn write_nav(tree: &NavTree, path: &Path) -> Result<()> {
    write_artifact(path, |out| write_nav_yaml(tree, out))
}

/// Create (or truncate) `path` and render into it; the handle is closed on every path out
fn write_artifact<F>(path: &Path, render: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), RenderError>,
{
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    render(&mut out).with_context(|| format!("Failed to write {}", path.display()))?;
    out.flush().with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn docs_with(files: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        let content = temp.path().join("ebook/en/content");
        fs::create_dir_all(&content).unwrap();
        for name in files {
            fs::write(content.join(name), format!("# {}\n", name)).unwrap();
        }
        temp
    }

    fn options_for(temp: &TempDir) -> GenerateOptions {
        GenerateOptions { docs_dir: temp.path().to_path_buf(), ..Default::default() }
    }

    #[test]
    fn test_collect_files_sorted() {
        let temp = docs_with(&["002-b-command.md", "001-a-command.md", "notes.md"]);
        let files = collect_files(&options_for(&temp)).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| Path::new(f).file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["001-a-command.md", "002-b-command.md", "notes.md"]);
    }

    #[test]
    fn test_collect_files_missing_docs_dir() {
        let temp = TempDir::new().unwrap();
        let options =
            GenerateOptions { docs_dir: temp.path().join("missing"), ..Default::default() };
        let err = collect_files(&options).unwrap_err();
        assert!(err.to_string().contains("Docs directory not found"));
    }

    #[test]
    fn test_generate_writes_both_artifacts() {
        let temp = docs_with(&["001-the-setup-command.md", "002-install-command.md", "notes.md"]);
        let options = options_for(&temp);

        let mut console = Vec::new();
        let report = generate(&options, &mut console).unwrap();

        assert_eq!(report.commands, 2);
        assert_eq!(report.slugmap, Some(temp.path().join("slugmap.json")));
        assert_eq!(report.command_navs, Some(temp.path().join("command_navs.yml")));
        assert!(console.is_empty());

        let slugmap: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(temp.path().join("slugmap.json")).unwrap())
                .unwrap();
        let keys: Vec<_> = slugmap.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&"setup".to_string()));
        assert!(keys.contains(&"install".to_string()));
        assert_eq!(slugmap["setup"]["path"], "ebook/en/content/001-the-setup-command.md");
        assert_eq!(slugmap["install"]["command_id"], "002");

        let navs = fs::read_to_string(temp.path().join("command_navs.yml")).unwrap();
        let setup = navs.find("001:&nbsp;<strong>setup</strong>").unwrap();
        let install = navs.find("002:&nbsp;<strong>install</strong>").unwrap();
        let wrap_up = navs.find("\"Wrap Up\"").unwrap();
        assert!(setup < install && install < wrap_up);
        assert!(!navs.contains("notes.md"));
    }

    #[test]
    fn test_slug_map_file_key_order() {
        let temp = docs_with(&["001-the-setup-command.md", "002-install-command.md"]);
        generate(&options_for(&temp), &mut Vec::new()).unwrap();

        let json = fs::read_to_string(temp.path().join("slugmap.json")).unwrap();
        let setup = json.find("\"setup\"").unwrap();
        let install = json.find("\"install\"").unwrap();
        assert!(setup < install);
    }

    #[test]
    fn test_generate_without_slugmap() {
        let temp = docs_with(&["001-ls-command.md"]);
        let options = GenerateOptions { create_slugmap: false, ..options_for(&temp) };

        let report = generate(&options, &mut Vec::new()).unwrap();
        assert_eq!(report.slugmap, None);
        assert!(!temp.path().join("slugmap.json").exists());
        assert!(temp.path().join("command_navs.yml").exists());
    }

    #[test]
    fn test_dry_run_prints_navigation_and_keeps_slug_map() {
        let temp = docs_with(&["001-ls-command.md"]);
        let options = GenerateOptions { dry_run: true, ..options_for(&temp) };

        let mut console = Vec::new();
        let report = generate(&options, &mut console).unwrap();

        assert_eq!(report.commands, 1);
        assert_eq!(report.slugmap, Some(temp.path().join("slugmap.json")));
        assert_eq!(report.command_navs, None);
        assert!(temp.path().join("slugmap.json").exists());
        assert!(!temp.path().join("command_navs.yml").exists());

        let printed = String::from_utf8(console).unwrap();
        assert!(printed.starts_with("\"nav\":\n"));
        assert!(printed.contains("<code>001:&nbsp;<strong>ls</strong></code>"));
    }

    #[test]
    fn test_dry_run_without_slug_map_writes_nothing() {
        let temp = docs_with(&["001-ls-command.md"]);
        let options =
            GenerateOptions { dry_run: true, create_slugmap: false, ..options_for(&temp) };

        let report = generate(&options, &mut Vec::new()).unwrap();
        assert_eq!(report.slugmap, None);
        assert!(!temp.path().join("slugmap.json").exists());
        assert!(!temp.path().join("command_navs.yml").exists());
    }

    /// Docs tree in a directory under the working directory, so it can
    /// be addressed with relative paths without changing directory
    fn docs_in_working_dir(files: &[&str]) -> (TempDir, String) {
        let temp = tempfile::Builder::new().prefix("composer-test").tempdir_in(".").unwrap();
        let content = temp.path().join("docs/ebook/en/content");
        fs::create_dir_all(&content).unwrap();
        for name in files {
            fs::write(content.join(name), format!("# {}\n", name)).unwrap();
        }
        let name = temp.path().file_name().unwrap().to_str().unwrap().to_string();
        (temp, name)
    }

    #[test]
    fn test_relative_docs_dirs_strip_the_root() {
        let (_temp, name) = docs_in_working_dir(&["001-ls-command.md", "002-cd-command.md"]);

        for docs_dir in [
            format!("{}/docs", name),
            format!("./{}/docs", name),
            format!("./{}/docs/.", name),
            format!("{}/docs/", name),
            format!("{}/../{}/docs", name, name),
        ] {
            let options = GenerateOptions {
                docs_dir: PathBuf::from(&docs_dir),
                dry_run: true,
                create_slugmap: false,
                ..Default::default()
            };
            let skeleton = skeleton(&options).unwrap();
            let paths: Vec<_> = skeleton.entries.iter().map(|e| e.path.as_str()).collect();
            assert_eq!(
                paths,
                vec!["ebook/en/content/001-ls-command.md", "ebook/en/content/002-cd-command.md"],
                "docs_dir {}",
                docs_dir
            );
        }
    }

    #[test]
    fn test_relative_docs_dir_artifacts() {
        let (temp, name) = docs_in_working_dir(&["001-the-setup-command.md"]);
        let options =
            GenerateOptions { docs_dir: PathBuf::from(format!("./{}/docs", name)), ..Default::default() };

        generate(&options, &mut Vec::new()).unwrap();

        let slugmap: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(temp.path().join("docs/slugmap.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(slugmap["setup"]["path"], "ebook/en/content/001-the-setup-command.md");

        let navs = fs::read_to_string(temp.path().join("docs/command_navs.yml")).unwrap();
        assert!(navs.contains(": \"ebook/en/content/001-the-setup-command.md\""));
        assert!(!navs.contains(&name));
    }

    #[test]
    fn test_docs_dir_with_glob_metacharacters() {
        let temp = TempDir::new().unwrap();
        let docs = temp.path().join("a[1]*?");
        let content = docs.join("ebook/en/content");
        fs::create_dir_all(&content).unwrap();
        fs::write(content.join("001-ls-command.md"), "# ls\n").unwrap();

        let options = GenerateOptions { docs_dir: docs, ..Default::default() };
        let skeleton = skeleton(&options).unwrap();
        assert_eq!(skeleton.entries.len(), 1);
        assert_eq!(skeleton.entries[0].path, "ebook/en/content/001-ls-command.md");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_file_names_are_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = docs_with(&["001-ls-command.md"]);
        let bad = OsStr::from_bytes(b"002-\xffbad-command.md");
        fs::write(temp.path().join("ebook/en/content").join(bad), "# bad\n").unwrap();

        let files = collect_files(&options_for(&temp)).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("/001-ls-command.md"));
        assert!(!files.iter().any(|f| f.contains('\u{FFFD}')));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_docs_dir_is_an_error() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = TempDir::new().unwrap();
        let docs = temp.path().join(OsStr::from_bytes(b"docs-\xff"));
        fs::create_dir_all(docs.join("ebook/en/content")).unwrap();

        let options = GenerateOptions { docs_dir: docs, ..Default::default() };
        let err = collect_files(&options).unwrap_err();
        assert!(err.to_string().contains("Docs directory is not valid UTF-8"));
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let temp = docs_with(&["001-the-setup-command.md", "002-install-command.md"]);
        let options = options_for(&temp);

        generate(&options, &mut Vec::new()).unwrap();
        let json1 = fs::read(temp.path().join("slugmap.json")).unwrap();
        let yaml1 = fs::read(temp.path().join("command_navs.yml")).unwrap();

        generate(&options, &mut Vec::new()).unwrap();
        assert_eq!(json1, fs::read(temp.path().join("slugmap.json")).unwrap());
        assert_eq!(yaml1, fs::read(temp.path().join("command_navs.yml")).unwrap());
    }

    #[test]
    fn test_no_command_files_is_fatal() {
        let temp = docs_with(&["notes.md", "000-introduction.md"]);
        let err = generate(&options_for(&temp), &mut Vec::new()).unwrap_err();
        assert!(matches!(err.downcast_ref::<ScanError>(), Some(ScanError::NoCommandFiles(_))));
        assert!(!temp.path().join("command_navs.yml").exists());
    }

    #[test]
    fn test_malformed_command_file_is_fatal() {
        let temp = docs_with(&["001-ls-command.md", "subcommand.md"]);
        let err = generate(&options_for(&temp), &mut Vec::new()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScanError>(),
            Some(ScanError::MalformedCommandFile(_))
        ));
    }

    #[test]
    fn test_write_failure_is_reported() {
        let temp = docs_with(&["001-ls-command.md"]);
        let options = GenerateOptions {
            slugmap_filename: "no/such/dir/slugmap.json".to_string(),
            ..options_for(&temp)
        };
        let err = generate(&options, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("Failed to create"));
    }

    #[test]
    fn test_check_reports_all_problems() {
        let temp = docs_with(&[
            "001-ls-command.md",
            "002-the-ls-command.md",
            "subcommand.md",
            "notes.md",
        ]);
        let (candidates, problems) = check(&options_for(&temp)).unwrap();
        assert_eq!(candidates, 3);
        assert_eq!(problems.len(), 2);
    }

    #[test]
    fn test_check_without_command_files() {
        let temp = docs_with(&["notes.md"]);
        let (candidates, problems) = check(&options_for(&temp)).unwrap();
        assert_eq!(candidates, 0);
        assert!(matches!(problems[0], ScanError::NoCommandFiles(_)));
    }
}
