/// Use cases module containing application orchestration
mod render_lock_state;

pub use render_lock_state::RenderLockStateUseCase;
