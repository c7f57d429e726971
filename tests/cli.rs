//! End-to-end tests for the `gallery-manifest` binary.
//!
//! Each test builds a throwaway project directory with a `public/gallery`
//! folder and runs the binary with that directory as its working directory,
//! exactly as a build script would.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn project() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let gallery = tmp.path().join("public/gallery");
    std::fs::create_dir_all(&gallery).unwrap();
    (tmp, gallery)
}

fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
    image::DynamicImage::new_rgb8(width, height)
        .save(dir.join(name))
        .unwrap();
}

fn run(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gallery-manifest"))
        .args(args)
        .current_dir(cwd)
        .env("RUST_LOG", "warn")
        .output()
        .unwrap()
}

fn read_manifest(cwd: &Path) -> serde_json::Value {
    let json = std::fs::read_to_string(cwd.join("public/gallery.json")).unwrap();
    serde_json::from_str(&json).unwrap()
}

fn entry_named<'a>(manifest: &'a serde_json::Value, name: &str) -> &'a serde_json::Value {
    manifest
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["name"] == name)
        .unwrap_or_else(|| panic!("no entry named {name} in {manifest}"))
}

#[test]
fn zero_argument_run_writes_flat_manifest() {
    let (tmp, gallery) = project();
    write_png(&gallery, "cat-1.png", 4, 3);
    write_png(&gallery, "dog.png", 2, 5);
    std::fs::write(gallery.join("notes.txt"), "not an image").unwrap();

    let out = run(tmp.path(), &[]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Wrote 2 entries to gallery.json"));

    let manifest = read_manifest(tmp.path());
    assert_eq!(manifest.as_array().unwrap().len(), 2);

    let cat = entry_named(&manifest, "cat-1");
    assert_eq!(cat["url"], "/gallery/cat-1.png");
    assert_eq!(cat["width"], 4);
    assert_eq!(cat["height"], 3);
    assert_eq!(cat["type"], "png");
    let size = std::fs::metadata(gallery.join("cat-1.png")).unwrap().len();
    assert_eq!(cat["size"], size);
}

#[test]
fn missing_gallery_exits_nonzero_without_output() {
    let tmp = TempDir::new().unwrap();

    let out = run(tmp.path(), &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Gallery directory does not exist"));
    assert!(!tmp.path().join("public/gallery.json").exists());
}

#[test]
fn corrupt_image_kept_with_null_dimensions() {
    let (tmp, gallery) = project();
    std::fs::write(gallery.join("broken.jpg"), "garbage bytes").unwrap();
    write_png(&gallery, "fine.png", 1, 1);

    let out = run(tmp.path(), &[]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("broken.jpg"));

    let manifest = read_manifest(tmp.path());
    let broken = entry_named(&manifest, "broken");
    assert!(broken["width"].is_null());
    assert!(broken["height"].is_null());
    assert_eq!(broken["url"], "/gallery/broken.jpg");
    assert_eq!(broken["type"], "jpg");
    assert_eq!(broken["size"], "garbage bytes".len());
}

#[test]
fn repeated_runs_are_byte_identical() {
    let (tmp, gallery) = project();
    write_png(&gallery, "a-1.png", 3, 3);
    write_png(&gallery, "a-2.png", 6, 3);
    write_png(&gallery, "b.png", 1, 2);

    assert!(run(tmp.path(), &["--grouped"]).status.success());
    let first = std::fs::read(tmp.path().join("public/gallery.json")).unwrap();
    assert!(run(tmp.path(), &["--grouped"]).status.success());
    let second = std::fs::read(tmp.path().join("public/gallery.json")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn grouped_layout_from_flag() {
    let (tmp, gallery) = project();
    write_png(&gallery, "cat-1.png", 1, 1);
    write_png(&gallery, "cat-2.png", 2, 2);
    write_png(&gallery, "dog.png", 3, 3);

    let out = run(tmp.path(), &["--grouped"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("Wrote 2 groups (3 images)"));

    let manifest = read_manifest(tmp.path());
    let cat = entry_named(&manifest, "cat");
    let mut urls: Vec<&str> = cat["alternates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["url"].as_str().unwrap())
        .collect();
    urls.sort();
    assert_eq!(urls, vec!["/gallery/cat-1.png", "/gallery/cat-2.png"]);
    assert!(cat["alternates"][0].get("name").is_none());

    let dog = entry_named(&manifest, "dog");
    assert_eq!(dog["alternates"].as_array().unwrap().len(), 1);
    assert_eq!(dog["alternates"][0]["width"], 3);
}

#[test]
fn uppercase_extension_included() {
    let (tmp, gallery) = project();
    write_png(&gallery, "Photo.PNG", 2, 2);

    assert!(run(tmp.path(), &[]).status.success());
    let manifest = read_manifest(tmp.path());
    let photo = entry_named(&manifest, "Photo");
    assert_eq!(photo["type"], "png");
    assert_eq!(photo["url"], "/gallery/Photo.PNG");
}

#[test]
fn config_file_and_flags_layer() {
    let (tmp, _) = project();
    let photos = tmp.path().join("static/photos");
    std::fs::create_dir_all(&photos).unwrap();
    write_png(&photos, "hero.png", 8, 4);
    std::fs::write(
        photos.join("logo.svg"),
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 40 20"></svg>"#,
    )
    .unwrap();
    std::fs::write(
        tmp.path().join("gallery.toml"),
        "source_dir = \"static/photos\"\nurl_prefix = \"/photos\"\n",
    )
    .unwrap();

    let out = run(tmp.path(), &["--include-svg"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let manifest = read_manifest(tmp.path());
    assert_eq!(manifest.as_array().unwrap().len(), 2);
    assert_eq!(entry_named(&manifest, "hero")["url"], "/photos/hero.png");
    let logo = entry_named(&manifest, "logo");
    assert_eq!(logo["type"], "svg");
    assert_eq!(logo["width"], 40);
    assert_eq!(logo["height"], 20);
}

#[test]
fn invalid_config_fails() {
    let (tmp, _) = project();
    std::fs::write(tmp.path().join("gallery.toml"), "colour = \"red\"\n").unwrap();

    let out = run(tmp.path(), &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!tmp.path().join("public/gallery.json").exists());
}

#[test]
fn check_writes_nothing() {
    let (tmp, gallery) = project();
    write_png(&gallery, "dog.png", 2, 2);

    let out = run(tmp.path(), &["check"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("001 dog (png, 2x2,"));
    assert!(!tmp.path().join("public/gallery.json").exists());
}

#[test]
fn gen_config_prints_template() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["gen-config"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("source_dir = \"public/gallery\""));
    assert!(stdout.contains("layout = \"flat\""));
}
