/// Fixed-step integration with a sub-step cap.
///
/// Frame time is accumulated and consumed in whole steps. Leftover time
/// smaller than one step carries over to the next frame; steps beyond
/// `max_sub_steps` are dropped so a long frame cannot trigger a spiral of
/// catch-up work.
#[derive(Clone, Debug)]
pub struct FixedTimestep {
    step: f32,
    max_sub_steps: u32,
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(step: f32, max_sub_steps: u32) -> Self {
        Self {
            step,
            max_sub_steps,
            accumulator: 0.0,
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Time carried over to the next call.
    pub fn leftover(&self) -> f32 {
        self.accumulator
    }

    /// Adds `dt` seconds and returns how many steps to run now.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if !dt.is_finite() || dt <= 0.0 {
            return 0;
        }

        self.accumulator += dt;
        let due = (self.accumulator / self.step).floor();
        self.accumulator -= due * self.step;

        let steps = (due as u32).min(self.max_sub_steps);
        if steps < due as u32 {
            log::trace!("dropping {} physics steps", due as u32 - steps);
        }
        steps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
