pub mod io;
pub mod rgb;
pub mod traits;

pub use self::io::RgbImageU8;
pub use self::rgb::RgbView;
pub use self::traits::{ImageView, Rows};
