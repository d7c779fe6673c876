use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Results come back in the same row-major order as [`generate_fractal`],
/// whatever order the pixels were evaluated in.
///
/// [`generate_fractal`]: crate::core::actions::generate_fractal::generate_fractal::generate_fractal
pub fn generate_fractal_rayon<Alg>(algorithm: &Alg) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let pixels: Vec<Point> = algorithm.pixel_rect().points().collect();

    pixels
        .into_par_iter()
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
    use crate::core::data::pixel_rect::PixelRect;
    use std::error::Error;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubSuccessAlgorithm {
        pixel_rect: PixelRect,
    }

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = i64;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok(i64::from(pixel.x) * 1000 + i64::from(pixel.y))
        }

        fn pixel_rect(&self) -> PixelRect {
            self.pixel_rect
        }
    }

    #[derive(Debug)]
    struct StubFailureAlgorithm {
        pixel_rect: PixelRect,
        failing_pixel: Point,
    }

    impl FractalAlgorithm for StubFailureAlgorithm {
        type Success = i64;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            if pixel == self.failing_pixel {
                return Err(StubError {});
            }

            Ok(0)
        }

        fn pixel_rect(&self) -> PixelRect {
            self.pixel_rect
        }
    }

    fn rect(top_left: Point, bottom_right: Point) -> PixelRect {
        PixelRect::new(top_left, bottom_right).unwrap()
    }

    #[test]
    fn test_serial_visits_pixels_in_row_major_order() {
        let algorithm = StubSuccessAlgorithm {
            pixel_rect: rect(Point { x: 0, y: 0 }, Point { x: 2, y: 1 }),
        };

        let results = generate_fractal(&algorithm).unwrap();

        assert_eq!(results, vec![0, 1000, 2000, 1, 1001, 2001]);
    }

    #[test]
    fn test_rayon_generates_same_results_as_sequential() {
        let algorithm = StubSuccessAlgorithm {
            pixel_rect: rect(Point { x: 0, y: 0 }, Point { x: 10, y: 8 }),
        };

        let sequential_results = generate_fractal(&algorithm).unwrap();
        let rayon_results = generate_fractal_rayon(&algorithm).unwrap();

        assert_eq!(rayon_results, sequential_results);
    }

    #[test]
    fn test_rayon_propagates_algorithm_failure() {
        let algorithm = StubFailureAlgorithm {
            pixel_rect: rect(Point { x: 0, y: 0 }, Point { x: 3, y: 4 }),
            failing_pixel: Point { x: 2, y: 3 },
        };

        assert_eq!(generate_fractal_rayon(&algorithm), Err(StubError {}));
        assert_eq!(generate_fractal(&algorithm), Err(StubError {}));
    }

    #[test]
    fn test_rayon_with_smallest_rect() {
        let algorithm = StubSuccessAlgorithm {
            pixel_rect: rect(Point { x: 5, y: 5 }, Point { x: 6, y: 6 }),
        };

        let sequential_results = generate_fractal(&algorithm).unwrap();
        let rayon_results = generate_fractal_rayon(&algorithm).unwrap();

        assert_eq!(rayon_results.len(), 4);
        assert_eq!(rayon_results, sequential_results);
    }

    #[test]
    fn test_rayon_with_large_offset_rect() {
        let algorithm = StubSuccessAlgorithm {
            pixel_rect: rect(Point { x: -50, y: -20 }, Point { x: 100, y: 100 }),
        };

        let sequential_results = generate_fractal(&algorithm).unwrap();
        let rayon_results = generate_fractal_rayon(&algorithm).unwrap();

        assert_eq!(rayon_results.len(), 151 * 121);
        assert_eq!(rayon_results, sequential_results);
    }
}
