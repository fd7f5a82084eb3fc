use super::*;

fn checker() -> image::RgbImage {
    image::RgbImage::from_fn(6, 4, |x, y| {
        if (x + y) % 2 == 0 {
            image::Rgb([200, 40, 10])
        } else {
            image::Rgb([5, 90, 250])
        }
    })
}

#[test]
fn encoded_png_decodes_back_to_the_same_pixels() {
    let img = checker();
    let bytes = encode_png(&img).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = image::load_from_memory_with_format(&bytes, image::ImageFormat::Png)
        .unwrap()
        .to_rgb8();
    assert_eq!(decoded, img);
}

#[test]
fn save_png_creates_missing_directories() {
    let dir = std::env::temp_dir().join(format!("glassmock-output-{}", std::process::id()));
    let path = dir.join("nested").join("frame.png");
    let _ = std::fs::remove_dir_all(&dir);

    save_png(&checker(), &path).unwrap();
    let decoded = image::open(&path).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (6, 4));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn file_name_joins_theme_and_screen() {
    assert_eq!(file_name("glass", "onboarding"), "glass_onboarding.png");
}
