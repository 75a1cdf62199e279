use super::*;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn raw_names(list: &[&str]) -> Vec<OsString> {
    list.iter().map(OsString::from).collect()
}

fn filter(list: &[&str], extensions: &[&str]) -> Vec<String> {
    filter_by_extension(Path::new("/roms"), raw_names(list), extensions).unwrap()
}

#[test]
fn test_strip_extension() {
    assert_eq!(strip_extension("Mario.z64"), "Mario");
    assert_eq!(strip_extension("README"), "README");
    assert_eq!(strip_extension("Super.Mario.64.z64"), "Super.Mario.64");
    assert_eq!(strip_extension("Trailing."), "Trailing");
}

#[test]
fn test_strip_extension_leading_dot() {
    assert_eq!(strip_extension(".z64"), ".z64");
    assert_eq!(strip_extension(".hidden.n64"), ".hidden");
}

#[test]
fn test_entry_from_filename() {
    let entry = GameEntry::from_filename("Zelda.n64");
    assert_eq!(entry.path, "./Zelda.n64");
    assert_eq!(entry.name, "Zelda");
}

#[test]
fn test_filter_is_case_sensitive() {
    let kept = filter(
        &["Mario.z64", "Kart.Z64", "Zelda.n64", "readme.txt"],
        &[".z64", ".n64"],
    );
    assert_eq!(kept, names(&["Mario.z64", "Zelda.n64"]));
}

#[test]
fn test_filter_preserves_order() {
    let kept = filter(&["b.z64", "a.z64", "c.n64"], &[".z64", ".n64"]);
    assert_eq!(kept, names(&["b.z64", "a.z64", "c.n64"]));
}

#[test]
fn test_filter_matches_suffix_not_extension() {
    // Plain suffix match, not a parsed extension.
    let kept = filter(&["x.z64", "z64", "notz64"], &[".z64"]);
    assert_eq!(kept, names(&["x.z64"]));

    let kept = filter(&["game.z64", "gamez64"], &["z64"]);
    assert_eq!(kept, names(&["game.z64", "gamez64"]));
}

#[test]
fn test_build_entries_one_per_name() {
    let entries = build_entries(&names(&["Mario.z64", "Zelda.n64"]));
    assert_eq!(
        entries,
        vec![
            GameEntry {
                path: "./Mario.z64".to_string(),
                name: "Mario".to_string(),
            },
            GameEntry {
                path: "./Zelda.n64".to_string(),
                name: "Zelda".to_string(),
            },
        ]
    );
}

#[test]
fn test_normalize_extensions() {
    assert_eq!(
        normalize_extensions(&["z64", ".n64", " v64 ", ""]),
        names(&[".z64", ".n64", ".v64"])
    );
}

#[test]
fn test_scan_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    match scan(&missing) {
        Err(CatalogError::ReadDir { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected ReadDir error, got {:?}", other),
    }
}

#[test]
fn test_scan_lists_files_and_dirs() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Mario.z64"), b"rom").unwrap();
    std::fs::create_dir(dir.path().join("Folder.n64")).unwrap();

    let mut listed = scan(dir.path()).unwrap();
    listed.sort();
    assert_eq!(listed, raw_names(&["Folder.n64", "Mario.z64"]));
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_rom_name_is_an_error() {
    use std::os::unix::ffi::OsStrExt;

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Mario.z64"), b"rom").unwrap();
    std::fs::write(dir.path().join(OsStr::from_bytes(b"Zel\xffda.z64")), b"rom").unwrap();

    let listed = scan(dir.path()).unwrap();
    assert_eq!(listed.len(), 2);

    match filter_by_extension(dir.path(), listed, &[".z64"]) {
        Err(CatalogError::InvalidFilename { folder, name }) => {
            assert_eq!(folder, dir.path());
            assert!(name.starts_with("Zel"));
            assert!(name.ends_with("da.z64"));
        }
        other => panic!("expected InvalidFilename error, got {:?}", other),
    }
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_name_without_rom_suffix_is_skipped() {
    use std::os::unix::ffi::OsStrExt;

    let listed = vec![
        OsString::from("Mario.z64"),
        OsStr::from_bytes(b"notes\xff.txt").to_os_string(),
    ];
    let kept = filter_by_extension(Path::new("/roms"), listed, &[".z64"]).unwrap();
    assert_eq!(kept, names(&["Mario.z64"]));
}
