//! Pipeline-level tests over real temporary directories.
//!
//! PNG fixtures are fabricated with the `image` crate so the container
//! phase exercises real decoding.

use icon_replacer::{BACKUP_DIR_NAME, CONTAINER_NAME, OutputManager, ReplaceError, Replacer};
use image::{Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_png(path: &Path, size: u32, color: [u8; 4]) {
    let img = RgbaImage::from_pixel(size, size, Rgba(color));
    img.save(path).expect("failed to write PNG fixture");
}

/// Icon directory with two recognized names and one unrecognized name.
fn fixture_icons_dir(root: &Path) -> PathBuf {
    let icons = root.join("icons");
    fs::create_dir(&icons).expect("failed to create icons dir");
    write_png(&icons.join("32x32.png"), 32, [255, 0, 0, 255]);
    write_png(&icons.join("128x128.png"), 128, [0, 255, 0, 255]);
    write_png(&icons.join("custom.png"), 48, [0, 0, 255, 255]);
    icons
}

fn replacer(source: &Path, icons: &Path) -> Replacer {
    Replacer::new(
        source.to_path_buf(),
        icons.to_path_buf(),
        OutputManager::new(true),
    )
}

#[tokio::test]
async fn happy_path_replaces_all_candidates() {
    let tmp = TempDir::new().unwrap();
    let icons = fixture_icons_dir(tmp.path());
    let source = tmp.path().join("drone.png");
    write_png(&source, 64, [10, 20, 30, 255]);

    let summary = replacer(&source, &icons).run().await.unwrap();

    assert_eq!(summary.backed_up, 3);
    assert_eq!(summary.replaced, 3);
    assert_eq!(summary.failed, 0);
    assert!(summary.container_written);
    // 3 replacement attempts + the container
    assert_eq!(summary.processed, 4);

    let source_bytes = fs::read(&source).unwrap();
    for name in ["32x32.png", "128x128.png", "custom.png"] {
        assert_eq!(
            fs::read(icons.join(name)).unwrap(),
            source_bytes,
            "{name} should be byte-identical to the source"
        );
    }
    assert!(icons.join(CONTAINER_NAME).is_file());
}

#[tokio::test]
async fn backup_holds_first_run_originals() {
    let tmp = TempDir::new().unwrap();
    let icons = fixture_icons_dir(tmp.path());
    let original_bytes = fs::read(icons.join("32x32.png")).unwrap();

    let source = tmp.path().join("drone.png");
    write_png(&source, 64, [10, 20, 30, 255]);
    replacer(&source, &icons).run().await.unwrap();

    let backup = icons.join(BACKUP_DIR_NAME).join("32x32.png");
    assert_eq!(fs::read(&backup).unwrap(), original_bytes);

    // Second run with a different source: backups must stay untouched
    write_png(&source, 16, [200, 200, 200, 255]);
    let summary = replacer(&source, &icons).run().await.unwrap();
    assert_eq!(summary.backed_up, 0, "nothing new to back up");
    assert_eq!(
        fs::read(&backup).unwrap(),
        original_bytes,
        "backup must keep the first observed bytes"
    );
    assert_eq!(
        fs::read(icons.join("32x32.png")).unwrap(),
        fs::read(&source).unwrap()
    );
}

#[tokio::test]
async fn container_reflects_current_source_each_run() {
    let tmp = TempDir::new().unwrap();
    let icons = fixture_icons_dir(tmp.path());
    let source = tmp.path().join("drone.png");

    write_png(&source, 64, [255, 0, 0, 255]);
    replacer(&source, &icons).run().await.unwrap();
    let first = fs::read(icons.join(CONTAINER_NAME)).unwrap();

    write_png(&source, 64, [0, 0, 255, 255]);
    replacer(&source, &icons).run().await.unwrap();
    let second = fs::read(icons.join(CONTAINER_NAME)).unwrap();

    assert_ne!(first, second, "container must be regenerated, not cached");
}

#[tokio::test]
async fn container_embeds_full_size_ladder_for_large_source() {
    let tmp = TempDir::new().unwrap();
    let icons = fixture_icons_dir(tmp.path());
    let source = tmp.path().join("drone.png");
    write_png(&source, 512, [10, 20, 30, 255]);

    replacer(&source, &icons).run().await.unwrap();

    let file = fs::File::open(icons.join(CONTAINER_NAME)).unwrap();
    let icon_dir = ico::IconDir::read(file).unwrap();
    // 16, 24, 32, 48, 64, 128, 256
    assert_eq!(icon_dir.entries().len(), 7);
    assert!(icon_dir.entries().iter().any(|e| e.width() == 256));
    assert!(icon_dir.entries().iter().any(|e| e.width() == 16));
}

#[tokio::test]
async fn small_source_gets_single_entry_container() {
    let tmp = TempDir::new().unwrap();
    let icons = fixture_icons_dir(tmp.path());
    let source = tmp.path().join("drone.png");
    write_png(&source, 8, [10, 20, 30, 255]);

    replacer(&source, &icons).run().await.unwrap();

    let file = fs::File::open(icons.join(CONTAINER_NAME)).unwrap();
    let icon_dir = ico::IconDir::read(file).unwrap();
    assert_eq!(icon_dir.entries().len(), 1);
    assert_eq!(icon_dir.entries()[0].width(), 8);
}

#[tokio::test]
async fn missing_source_fails_before_any_mutation() {
    let tmp = TempDir::new().unwrap();
    let icons = fixture_icons_dir(tmp.path());
    let original_bytes = fs::read(icons.join("custom.png")).unwrap();
    let source = tmp.path().join("absent.png");

    let err = replacer(&source, &icons).run().await.unwrap_err();
    assert!(matches!(err, ReplaceError::MissingSource { .. }));

    assert!(
        !icons.join(BACKUP_DIR_NAME).exists(),
        "no backup directory on precondition failure"
    );
    assert!(!icons.join(CONTAINER_NAME).exists());
    assert_eq!(fs::read(icons.join("custom.png")).unwrap(), original_bytes);
}

#[tokio::test]
async fn missing_icon_directory_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("drone.png");
    write_png(&source, 64, [10, 20, 30, 255]);

    let err = replacer(&source, &tmp.path().join("nowhere"))
        .run()
        .await
        .unwrap_err();
    assert!(matches!(err, ReplaceError::MissingIconDir { .. }));
}

#[tokio::test]
async fn empty_directory_fails_after_backup_phase() {
    let tmp = TempDir::new().unwrap();
    let icons = tmp.path().join("icons");
    fs::create_dir(&icons).unwrap();
    let source = tmp.path().join("drone.png");
    write_png(&source, 64, [10, 20, 30, 255]);

    let err = replacer(&source, &icons).run().await.unwrap_err();
    assert!(matches!(err, ReplaceError::NoCandidates { .. }));

    // The backup phase ran harmlessly and left its (empty) directory
    let backup = icons.join(BACKUP_DIR_NAME);
    assert!(backup.is_dir());
    assert_eq!(fs::read_dir(&backup).unwrap().count(), 0);
    assert!(!icons.join(CONTAINER_NAME).exists());
}

#[tokio::test]
async fn undecodable_source_still_replaces_candidates() {
    let tmp = TempDir::new().unwrap();
    let icons = fixture_icons_dir(tmp.path());
    let source = tmp.path().join("drone.png");
    fs::write(&source, b"not actually a png").unwrap();

    // Replacement copies bytes without decoding; only the container phase
    // needs a decodable image, and its failure must not fail the run.
    let summary = replacer(&source, &icons).run().await.unwrap();
    assert_eq!(summary.replaced, 3);
    assert_eq!(summary.failed, 0);
    assert!(!summary.container_written);
    assert_eq!(summary.processed, 4, "container attempt still counts");

    assert_eq!(
        fs::read(icons.join("32x32.png")).unwrap(),
        b"not actually a png"
    );
    assert!(!icons.join(CONTAINER_NAME).exists());
}

#[cfg(unix)]
#[tokio::test]
async fn unwritable_candidate_does_not_block_the_rest() {
    use std::os::unix::fs::{MetadataExt, PermissionsExt};

    let tmp = TempDir::new().unwrap();
    // Permission bits don't constrain root, so there is nothing to observe
    if fs::metadata(tmp.path()).unwrap().uid() == 0 {
        return;
    }

    let icons = fixture_icons_dir(tmp.path());
    let source = tmp.path().join("drone.png");
    write_png(&source, 64, [10, 20, 30, 255]);

    let locked = icons.join("128x128.png");
    let original_locked_bytes = fs::read(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o444)).unwrap();

    let summary = replacer(&source, &icons).run().await.unwrap();

    // The locked file is still readable, so its backup succeeds; only its
    // replacement fails, and the other candidates and the container proceed
    assert_eq!(summary.backed_up, 3);
    assert_eq!(summary.replaced, 2);
    assert_eq!(summary.failed, 1);
    assert!(summary.container_written);
    assert_eq!(summary.processed, 4);

    let source_bytes = fs::read(&source).unwrap();
    assert_eq!(fs::read(icons.join("32x32.png")).unwrap(), source_bytes);
    assert_eq!(fs::read(icons.join("custom.png")).unwrap(), source_bytes);
    assert_eq!(fs::read(&locked).unwrap(), original_locked_bytes);
    assert!(icons.join(CONTAINER_NAME).is_file());
}

#[tokio::test]
async fn second_run_ignores_generated_container() {
    let tmp = TempDir::new().unwrap();
    let icons = fixture_icons_dir(tmp.path());
    let source = tmp.path().join("drone.png");
    write_png(&source, 64, [10, 20, 30, 255]);

    replacer(&source, &icons).run().await.unwrap();
    let summary = replacer(&source, &icons).run().await.unwrap();

    // icon.ico and the backup directory are not replacement candidates
    assert_eq!(summary.replaced, 3);
    assert_eq!(summary.processed, 4);
    assert!(
        !icons.join(BACKUP_DIR_NAME).join(CONTAINER_NAME).exists(),
        "container never lands in the backup"
    );
}
