use super::*;
use crate::animation::AnimationHandle;
use crate::test_utils::test_helpers::{encode_gif, solid_frames};
use image::Rgba;
use std::io::Write;
use tempfile::TempDir;

#[test]
fn test_decode_reports_frame_count_and_size() {
    let bytes = encode_gif(&solid_frames(6, 4, 3));

    let anim = decode_gif(&bytes).unwrap();

    assert_eq!(anim.frame_count(), 3);
    assert_eq!(anim.native_width(), 6);
    assert_eq!(anim.native_height(), 4);
}

#[test]
fn test_decoded_frames_keep_their_colors() {
    let frames = vec![
        image::RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255])),
        image::RgbaImage::from_pixel(2, 2, Rgba([0, 0, 255, 255])),
    ];
    let anim = decode_gif(&encode_gif(&frames)).unwrap();

    assert_eq!(anim.frame(0).unwrap().get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
    assert_eq!(anim.frame(1).unwrap().get_pixel(1, 1), &Rgba([0, 0, 255, 255]));
}

fn zero_screen_size(mut bytes: Vec<u8>) -> Vec<u8> {
    bytes[6..10].fill(0);
    bytes
}

#[test]
fn test_zero_screen_falls_back_to_first_frame_size() {
    let frames = vec![
        image::RgbaImage::from_pixel(3, 2, Rgba([255, 0, 0, 255])),
        image::RgbaImage::from_pixel(3, 2, Rgba([0, 0, 255, 255])),
    ];
    let bytes = zero_screen_size(encode_gif(&frames));

    let anim = decode_gif(&bytes).unwrap();

    assert_eq!(anim.frame_count(), 2);
    assert_eq!((anim.native_width(), anim.native_height()), (3, 2));
    assert_eq!(anim.frame(0).unwrap().dimensions(), (3, 2));
    assert_eq!(anim.frame(0).unwrap().get_pixel(2, 1), &Rgba([255, 0, 0, 255]));
    assert_eq!(anim.frame(1).unwrap().get_pixel(0, 0), &Rgba([0, 0, 255, 255]));
}

#[test]
fn test_zero_screen_without_frames_fails() {
    let bytes = b"GIF89a\x00\x00\x00\x00\x00\x00\x00\x3b";
    assert!(decode_gif(bytes).is_err());
}

#[test]
fn test_decode_rejects_garbage() {
    let result = decode_gif(b"definitely not a gif");
    assert!(matches!(result, Err(ScrubError::Decode(_))));
}

#[test]
fn test_decode_rejects_empty_input() {
    assert!(decode_gif(&[]).is_err());
}

#[test]
fn test_decode_gif_without_frames_fails() {
    // Header, 1x1 logical screen without a color table, then the trailer
    let bytes = b"GIF89a\x01\x00\x01\x00\x00\x00\x00\x3b";
    assert!(decode_gif(bytes).is_err());
}

#[test]
fn test_decode_file_reads_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("anim.gif");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(&encode_gif(&solid_frames(3, 3, 5))).unwrap();

    let anim = decode_file(&path).unwrap();
    assert_eq!(anim.frame_count(), 5);
}

#[test]
fn test_decode_file_missing_is_io_error() {
    let result = decode_file(Path::new("/nonexistent/path/anim.gif"));
    assert!(matches!(result, Err(ScrubError::Io(_))));
}
