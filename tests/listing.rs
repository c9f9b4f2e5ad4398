use filename_sort::{
    filter_to_numeric_siblings, list_sorted, list_sorted_filling_missing, Error, FillOptions, ListOptions,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn fixture(files: &[&str], dirs: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for dir in dirs {
        fs::create_dir_all(tmp.path().join(dir)).unwrap();
    }
    for file in files {
        fs::write(tmp.path().join(file), b"").unwrap();
    }
    tmp
}

fn names(paths: &[String]) -> Vec<&str> {
    paths
        .iter()
        .map(|p| Path::new(p).file_name().unwrap().to_str().unwrap())
        .collect()
}

#[test]
fn default_listing_skips_txt_and_directories() {
    let tmp = fixture(&["frame10.png", "frame2.png", "log.txt", "frame1.png"], &["frame3"]);

    let listed = list_sorted(tmp.path(), &ListOptions::default()).unwrap();
    assert_eq!(names(&listed), vec!["frame1.png", "frame2.png", "frame10.png"]);
}

#[test]
fn explicit_pattern_keeps_txt_and_optionally_directories() {
    let tmp = fixture(&["a2.txt", "a10.txt", "b1.png"], &["a3"]);

    let listed = list_sorted(tmp.path(), &ListOptions::with_pattern("a*")).unwrap();
    assert_eq!(names(&listed), vec!["a2.txt", "a10.txt"]);

    let listed = list_sorted(tmp.path(), &ListOptions::with_pattern("a*").include_dirs()).unwrap();
    assert_eq!(names(&listed), vec!["a2.txt", "a3", "a10.txt"]);
}

#[test]
fn listed_paths_are_joined_to_the_directory() {
    let tmp = fixture(&["x1.png"], &[]);

    let listed = list_sorted(tmp.path(), &ListOptions::default()).unwrap();
    assert_eq!(listed, vec![tmp.path().join("x1.png").to_string_lossy().to_string()]);
}

#[test]
fn siblings_share_structure_with_reference() {
    let tmp = fixture(
        &["cell_1_t5.tif", "cell_1_t40.tif", "cell_2_t5.tif", "cell_1_t5.png", "cell_1.tif", "notes.txt"],
        &[],
    );
    let reference = tmp.path().join("cell_9_t9.tif").to_string_lossy().to_string();

    let siblings = filter_to_numeric_siblings(&reference, tmp.path()).unwrap();
    assert_eq!(names(&siblings), vec!["cell_1_t5.tif", "cell_1_t40.tif", "cell_2_t5.tif"]);
}

#[test]
fn siblings_of_reference_in_another_directory_is_empty() {
    let tmp = fixture(&["a1.png", "a2.png"], &[]);
    let siblings = filter_to_numeric_siblings("elsewhere/a1.png", tmp.path()).unwrap();
    assert!(siblings.is_empty());
}

#[test]
fn filling_missing_frames() {
    let tmp = fixture(&["t0_z0.png", "t0_z1.png", "t1_z1.png", "readme.txt"], &[]);
    let base = tmp.path();

    let filled = list_sorted_filling_missing(base, &ListOptions::default(), &FillOptions::default()).unwrap();
    let expected = vec![
        Some(base.join("t0_z0.png").to_string_lossy().to_string()),
        Some(base.join("t0_z1.png").to_string_lossy().to_string()),
        None,
        Some(base.join("t1_z1.png").to_string_lossy().to_string()),
    ];
    assert_eq!(filled, expected);
}

#[test]
fn filling_from_one_with_zero_frame_fails() {
    let tmp = fixture(&["t0.png", "t1.png"], &[]);

    let err = list_sorted_filling_missing(tmp.path(), &ListOptions::default(), &FillOptions::starting_at(1))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn filling_mixed_names_fails_fast() {
    let tmp = fixture(&["t1.png", "t1_extra2.png"], &[]);

    let err = list_sorted_filling_missing(tmp.path(), &ListOptions::default(), &FillOptions::default())
        .unwrap_err();
    assert!(matches!(err, Error::StructuralMismatch { .. }));
}

#[test]
fn filling_empty_directory() {
    let tmp = fixture(&[], &[]);

    let filled = list_sorted_filling_missing(tmp.path(), &ListOptions::default(), &FillOptions::starting_at(1)).unwrap();
    assert!(filled.is_empty());
}
