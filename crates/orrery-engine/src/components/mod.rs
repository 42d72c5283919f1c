pub mod body;
pub mod ring;
