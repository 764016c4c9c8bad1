use image::{imageops, GrayImage, RgbImage};
use imageproc::contours::find_contours;
use imageproc::distance_transform::Norm;
use imageproc::edges::canny;
use imageproc::filter::box_filter;
use imageproc::morphology::dilate;
use imageproc::point::Point;
use imageproc::rect::Rect;

use std::cmp::Ordering;

use crate::utils::contour_area;

// Canny thresholds tuned for plate edges against a car body
const CANNY_LOW: f32 = 150.0;
const CANNY_HIGH: f32 = 200.0;
// only the largest contours are worth a polygon fit
const TOP_CONTOURS: usize = 10;
// polygon approximation tolerance, as a fraction of the contour perimeter
const APPROX_TOLERANCE: f64 = 0.02;

/// A quadrilateral contour hypothesized to bound a license plate.
pub struct PlateCandidate {
    pub polygon: Vec<Point<i32>>,
    pub bbox: Rect,
}

/// Grayscale + 3x3 box blur. The blurred image is also what gets cropped
/// for OCR, so it is returned to the caller rather than kept internal.
pub fn preprocess(frame: &RgbImage) -> GrayImage {
    let gray = imageops::grayscale(frame);
    box_filter(&gray, 1, 1)
}

/// Search one preprocessed frame for a plate-shaped region.
///
/// Contours of the dilated edge map are ranked by area and the ten largest
/// are approximated to polygons; the first one with exactly four vertices
/// wins. That is a deliberate "first match", not "best fit": a larger
/// near-rectangle earlier in the ranking shadows a tighter one later.
pub fn find_plate(gray: &GrayImage) -> Option<PlateCandidate> {
    let edges = canny(gray, CANNY_LOW, CANNY_HIGH);
    let edges = dilate(&edges, Norm::LInf, 1);

    let mut ranked: Vec<(f64, Vec<Point<i32>>)> = find_contours::<i32>(&edges)
        .into_iter()
        .map(|contour| (contour_area(&contour.points), contour.points))
        .collect();
    ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    ranked.truncate(TOP_CONTOURS);

    for (_, points) in &ranked {
        let perimeter = imageproc::geometry::arc_length(points, true);
        let polygon = imageproc::geometry::approximate_polygon_dp(
            points,
            APPROX_TOLERANCE * perimeter,
            true,
        );
        if polygon.len() == 4 {
            // approximated corners can sit inside the true extent, so the
            // box is taken over the full contour
            let bbox = bounding_rect(points)?;
            return Some(PlateCandidate { polygon, bbox });
        }
    }
    None
}

/// Axis-aligned crop of the candidate region from the preprocessed
/// grayscale image. No deskew; OCR gets the box as-is.
pub fn crop_plate(gray: &GrayImage, bbox: Rect) -> GrayImage {
    let x = bbox.left().max(0) as u32;
    let y = bbox.top().max(0) as u32;
    imageops::crop_imm(gray, x, y, bbox.width(), bbox.height()).to_image()
}

fn bounding_rect(polygon: &[Point<i32>]) -> Option<Rect> {
    let first = polygon.first()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for point in polygon {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }
    let width = (max_x - min_x + 1) as u32;
    let height = (max_y - min_y + 1) as u32;
    Some(Rect::at(min_x, min_y).of_size(width, height))
}

#[cfg(test)]
mod test {

    use image::{GrayImage, Luma, RgbImage};
    use imageproc::drawing::draw_filled_rect_mut;
    use imageproc::rect::Rect;

    use super::{crop_plate, find_plate, preprocess};

    #[test]
    fn blank_frame_has_no_candidate() {
        let frame = RgbImage::new(320, 240);
        let gray = preprocess(&frame);
        assert!(find_plate(&gray).is_none());
    }

    #[test]
    fn bright_rectangle_is_found_as_four_vertex_candidate() {
        let mut gray = GrayImage::new(320, 240);
        draw_filled_rect_mut(
            &mut gray,
            Rect::at(60, 50).of_size(160, 80),
            Luma([255u8]),
        );
        let blurred = imageproc::filter::box_filter(&gray, 1, 1);

        let candidate = find_plate(&blurred).expect("rectangle not detected");
        assert_eq!(candidate.polygon.len(), 4);
        // the bounding box must cover the drawn rectangle, give or take
        // the dilation margin
        let bbox = candidate.bbox;
        assert!(bbox.left() <= 60 && bbox.top() <= 50);
        assert!(bbox.left() + bbox.width() as i32 >= 219);
        assert!(bbox.top() + bbox.height() as i32 >= 129);
    }

    #[test]
    fn crop_matches_bounding_box_dimensions() {
        let gray = GrayImage::new(320, 240);
        let crop = crop_plate(&gray, Rect::at(10, 20).of_size(100, 40));
        assert_eq!(crop.dimensions(), (100, 40));
    }

}
