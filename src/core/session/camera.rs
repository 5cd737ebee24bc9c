//=========================================================================
// Camera
//=========================================================================
//
// Vertical scroll position over a static world.
//
// `scroll_y` is the world y shown at the top of the screen. It only
// decreases (the camera only climbs) until the session restarts.
//
//=========================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    scroll_y: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self { scroll_y: 0.0 }
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    /// Keeps `target_y` at or below `threshold` pixels from the top of
    /// the screen. Returns `true` if the camera moved.
    pub fn follow(&mut self, target_y: f32, threshold: f32) -> bool {
        let wanted = target_y - threshold;
        if wanted < self.scroll_y {
            self.scroll_y = wanted;
            true
        } else {
            false
        }
    }

    pub fn to_screen(&self, world: (f32, f32)) -> (f32, f32) {
        (world.0, world.1 - self.scroll_y)
    }

    pub fn reset(&mut self) {
        self.scroll_y = 0.0;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
