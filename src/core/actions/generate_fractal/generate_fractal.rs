use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;

/// Evaluates every pixel of the algorithm's rect on the calling thread, in
/// row-major order.
pub fn generate_fractal<Alg: FractalAlgorithm>(algorithm: &Alg) -> Result<Vec<Alg::Success>, Alg::Failure> {
    algorithm
        .pixel_rect()
        .points()
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
