pub mod position;
pub mod scorer;

pub use position::{RankPosition, apex_checkpoint, promotion_target, rank_at_score};
pub use scorer::{MASTER_BASE, score, score_position};
