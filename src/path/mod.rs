//! SVG path data
//!
//! - `svg_path`: `SvgPath` builder, `PathCommand` and number formatting
//! - `shapes`: path fragments for tile decorations

pub mod shapes;
pub mod svg_path;

pub use shapes::{
    arrow_tip_path, cross_path, curved_element_enlarged_path, straight_arrow_path,
    straight_element_path,
};
pub use svg_path::{PathCommand, SvgPath};
