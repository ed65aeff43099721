use std::time::Duration;

/// Ambient parameters for one submission: the board supplied by the embedding
/// context and how long the success toast stays visible.
#[derive(Clone, Debug)]
pub struct SubmitContext {
    pub board_id: i64,
    pub success_toast: Duration,
}
