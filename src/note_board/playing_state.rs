#[derive(Clone, Copy, Debug)]
pub enum PlayingState {
    NotPlaying,
    Playing,
}
