pub mod pixel_to_uv;
pub mod shading;
