pub mod adjust;
pub mod codec;
pub mod duotone;
pub mod resample;

pub use codec::{decode, encode, optimize};
pub use duotone::{parse_hex_color, Duotone};
