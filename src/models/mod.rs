// Data Models
pub mod confetti;
pub mod particle;
pub mod shape;

pub use confetti::ConfettiStream;
pub use particle::Particle;
pub use shape::FloatingShape;
