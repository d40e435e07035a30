use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use vignette::resources::image::decode_rgba;

#[test]
fn png_round_trips_to_raw_rgba() {
    let mut img = RgbaImage::new(2, 2);
    img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
    img.put_pixel(1, 0, Rgba([0, 255, 0, 255]));
    img.put_pixel(0, 1, Rgba([0, 0, 255, 255]));
    img.put_pixel(1, 1, Rgba([10, 20, 30, 40]));

    let mut encoded = Vec::new();
    img.write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)
        .expect("png encode");

    let decoded = decode_rgba(&encoded).expect("png decode");
    assert_eq!(decoded.width, 2);
    assert_eq!(decoded.height, 2);
    assert_eq!(
        decoded.pixels,
        vec![
            255, 0, 0, 255, //
            0, 255, 0, 255, //
            0, 0, 255, 255, //
            10, 20, 30, 40,
        ]
    );
}

#[test]
fn garbage_bytes_are_an_error() {
    assert!(decode_rgba(&[0x00, 0x01, 0x02, 0x03]).is_err());
}
