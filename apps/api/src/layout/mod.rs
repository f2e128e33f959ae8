// Layout primitives: static font metrics, page geometry, line wrapping and pagination.
// Everything here is synchronous and allocation-light; the render pipeline calls it
// from inside tokio::task::spawn_blocking.

pub mod flow;
pub mod font_metrics;
pub mod style;
pub mod wrap;

pub use flow::{Canvas, Cursor, DrawOp, FlowController, Page};
pub use font_metrics::{get_metrics, FontFace};
pub use style::{DocumentStyle, Gap, Rgb};
pub use wrap::wrap_text;
