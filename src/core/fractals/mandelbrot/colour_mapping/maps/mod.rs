pub mod fire_gradient;
pub mod glow_gradient;
