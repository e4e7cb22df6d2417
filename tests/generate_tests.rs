use image::{Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use notification_icons::config::Config;
use notification_icons::density::Density;
use notification_icons::generator::{drawable_dir_in, generate_all, GenerationReport, IconKind};
use notification_icons::icon::synthesize_placeholder;
use notification_icons::source::{load_source_icon, SourceIcon, SourceUnavailable};

/// Run the same pass the binary runs, against `res_dir`
fn run(res_dir: &Path) -> (SourceIcon, GenerationReport) {
    let config = Config {
        res_dir: res_dir.to_path_buf(),
        ..Config::default()
    };
    let source = load_source_icon(&config.source_icon_path());
    let report = generate_all(
        &source,
        &Density::ALL,
        &config.output_file,
        drawable_dir_in(&config.res_dir),
    );
    (source, report)
}

fn output_path(res_dir: &Path, density: Density) -> PathBuf {
    res_dir
        .join(format!("drawable-{}", density.label()))
        .join("ic_notification.png")
}

/// 96x96 launcher icon: opaque red disc with a soft edge ring at half alpha
fn write_launcher_icon(res_dir: &Path) {
    let mut img = RgbaImage::from_pixel(96, 96, Rgba([0, 0, 0, 0]));
    for (x, y, p) in img.enumerate_pixels_mut() {
        let dx = x as i32 - 48;
        let dy = y as i32 - 48;
        let d2 = dx * dx + dy * dy;
        if d2 <= 30 * 30 {
            *p = Rgba([220, 30, 30, 255]);
        } else if d2 <= 34 * 34 {
            *p = Rgba([220, 30, 30, 128]);
        }
    }
    let dir = res_dir.join("mipmap-xxxhdpi");
    fs::create_dir_all(&dir).unwrap();
    img.save(dir.join("launcher_icon.png")).unwrap();
}

#[test]
fn test_all_densities_written_with_table_sizes() {
    let tmp = TempDir::new().unwrap();
    write_launcher_icon(tmp.path());

    let (source, report) = run(tmp.path());
    assert!(matches!(source, SourceIcon::Loaded(_)));
    assert!(report.is_complete());
    assert_eq!(report.written.len(), 5);

    for density in Density::ALL {
        let path = output_path(tmp.path(), density);
        let img = image::open(&path)
            .unwrap_or_else(|e| panic!("{} should decode: {}", path.display(), e))
            .to_rgba8();
        assert_eq!(img.dimensions(), (density.size(), density.size()));

        // Colour is white wherever the shape is
        for p in img.pixels().filter(|p| p[3] > 0) {
            assert_eq!((p[0], p[1], p[2]), (255, 255, 255));
        }
    }
}

#[test]
fn test_xxxhdpi_silhouette_keeps_alpha() {
    let tmp = TempDir::new().unwrap();
    write_launcher_icon(tmp.path());
    run(tmp.path());

    let img = image::open(output_path(tmp.path(), Density::Xxxhdpi))
        .unwrap()
        .to_rgba8();
    assert_eq!(*img.get_pixel(48, 48), Rgba([255, 255, 255, 255]));
    assert_eq!(img.get_pixel(0, 0)[3], 0);
}

#[test]
fn test_runs_are_byte_identical() {
    for with_source in [true, false] {
        let tmp = TempDir::new().unwrap();
        if with_source {
            write_launcher_icon(tmp.path());
        }

        run(tmp.path());
        let first: Vec<Vec<u8>> = Density::ALL
            .iter()
            .map(|&d| fs::read(output_path(tmp.path(), d)).unwrap())
            .collect();

        run(tmp.path());
        let second: Vec<Vec<u8>> = Density::ALL
            .iter()
            .map(|&d| fs::read(output_path(tmp.path(), d)).unwrap())
            .collect();

        assert_eq!(first, second, "with_source = {}", with_source);
    }
}

#[test]
fn test_missing_source_falls_back_to_placeholders() {
    let tmp = TempDir::new().unwrap();

    let (source, report) = run(tmp.path());
    assert!(matches!(
        source,
        SourceIcon::Unavailable(SourceUnavailable::Missing { .. })
    ));
    assert!(report.is_complete());
    assert!(report.written.iter().all(|w| w.kind == IconKind::Placeholder));

    for density in Density::ALL {
        let img = image::open(output_path(tmp.path(), density))
            .unwrap()
            .to_rgba8();
        assert_eq!(img.as_raw(), synthesize_placeholder(density.size()).as_raw());
    }
}

#[test]
fn test_corrupt_source_falls_back_to_placeholders() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("mipmap-xxxhdpi");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("launcher_icon.png"), b"\x89PNG truncated").unwrap();

    let (source, report) = run(tmp.path());
    assert!(matches!(
        source,
        SourceIcon::Unavailable(SourceUnavailable::Decode { .. })
    ));
    assert_eq!(report.written.len(), 5);
    assert!(report.written.iter().all(|w| w.kind == IconKind::Placeholder));
}

#[test]
fn test_existing_directories_and_files_are_reused() {
    let tmp = TempDir::new().unwrap();
    let stale = output_path(tmp.path(), Density::Mdpi);
    fs::create_dir_all(stale.parent().unwrap()).unwrap();
    fs::write(&stale, b"stale").unwrap();

    let (_, report) = run(tmp.path());
    assert!(report.is_complete());

    let img = image::open(&stale).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (24, 24));
}

#[test]
fn test_one_failed_density_does_not_stop_the_rest() {
    let tmp = TempDir::new().unwrap();
    // A regular file where the hdpi directory should go
    fs::write(tmp.path().join("drawable-hdpi"), b"in the way").unwrap();

    let (_, report) = run(tmp.path());

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].density, Density::Hdpi);
    assert_eq!(report.failures[0].path, output_path(tmp.path(), Density::Hdpi));

    let written: Vec<Density> = report.written.iter().map(|w| w.density).collect();
    assert_eq!(
        written,
        vec![Density::Mdpi, Density::Xhdpi, Density::Xxhdpi, Density::Xxxhdpi]
    );
    for density in written {
        assert!(output_path(tmp.path(), density).exists());
    }
}
