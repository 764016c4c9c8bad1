use image::{GrayImage, RgbImage};
use imageproc::point::Point;

/// Pack an RGB image into the 0RGB u32 layout a window buffer expects.
pub fn pack_rgb(img: &RgbImage) -> Vec<u32> {
    img.pixels().map(|p| {
        let [r, g, b] = p.0;
        ((r as u32) << 16) | ((g as u32) << 8) | b as u32
    }).collect()
}

pub fn pack_luma(img: &GrayImage) -> Vec<u32> {
    img.pixels().map(|p| {
        let v = p.0[0] as u32;
        (v << 16) | (v << 8) | v
    }).collect()
}

// shoelace formula, same convention as OpenCV's contourArea
pub fn contour_area(points: &[Point<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut doubled = 0i64;
    for (i, p) in points.iter().enumerate() {
        let q = &points[(i + 1) % points.len()];
        doubled += p.x as i64 * q.y as i64 - q.x as i64 * p.y as i64;
    }
    doubled.abs() as f64 / 2.0
}

#[cfg(test)]
mod test {

    use image::{GrayImage, Luma, Rgb, RgbImage};
    use imageproc::point::Point;

    use super::{contour_area, pack_luma, pack_rgb};

    #[test]
    fn rectangle_area() {
        let rect = [
            Point::new(0, 0),
            Point::new(4, 0),
            Point::new(4, 3),
            Point::new(0, 3),
        ];
        assert_eq!(contour_area(&rect), 12.0);
    }

    #[test]
    fn degenerate_contours_have_zero_area() {
        assert_eq!(contour_area(&[]), 0.0);
        assert_eq!(contour_area(&[Point::new(1, 1), Point::new(5, 5)]), 0.0);
    }

    #[test]
    fn vertex_order_does_not_change_area() {
        let cw = [Point::new(0, 0), Point::new(0, 3), Point::new(4, 3), Point::new(4, 0)];
        assert_eq!(contour_area(&cw), 12.0);
    }

    #[test]
    fn packs_channels_into_0rgb() {
        let mut img = RgbImage::new(1, 1);
        img.put_pixel(0, 0, Rgb([0x12, 0x34, 0x56]));
        assert_eq!(pack_rgb(&img), vec![0x123456]);

        let mut gray = GrayImage::new(1, 1);
        gray.put_pixel(0, 0, Luma([0xAB]));
        assert_eq!(pack_luma(&gray), vec![0xABABAB]);
    }

}
