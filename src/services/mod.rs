pub mod layout;
pub mod lexicon;
pub mod metrics;
pub mod render;
pub mod scoring;

pub use layout::LayoutPlanner;
pub use lexicon::Lexicon;
pub use metrics::{get_metrics, init_metrics};
pub use render::BoardRenderer;
pub use scoring::score_word;
