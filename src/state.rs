#[derive(Debug, PartialEq, Clone, Copy)]
pub enum CyclePhase {
    Idle,    // No cycle started yet
    Moving,  // Window is travelling between two edges
    Paused,  // Motion finished, waiting before the next cycle
}

#[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
pub enum FadePhase {
    Hidden,
    FadingIn,
    Holding,   // Fully visible, fade-out delay running
    FadingOut,
}
