//! Frame-counted progress timers.
//!
//! A `Timer` of duration `d` yields the progress ratios `0/d, 1/d, ..., d/d`
//! (one per step, `d + 1` in total) and then stops. Timers are plain values
//! owned by the caller; nothing here keeps global frame state.

/// Counts steps towards completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timer {
    duration: u32,
    count: u32,
    completed: bool,
}

impl Timer {
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            count: 0,
            completed: false,
        }
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Progress for this step, or `None` once the ratio 1 has been yielded.
    ///
    /// A zero duration yields 1 once.
    pub fn step(&mut self) -> Option<f64> {
        if self.completed {
            return None;
        }
        let progress = if self.duration == 0 {
            1.0
        } else {
            self.count as f64 / self.duration as f64
        };
        if progress >= 1.0 {
            self.completed = true;
        } else {
            self.count += 1;
        }
        Some(progress)
    }
}

impl Iterator for Timer {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.step()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = if self.completed {
            0
        } else {
            (self.duration - self.count) as usize + 1
        };
        (left, Some(left))
    }
}

/// Step every timer once, report its progress with its payload, and drop the
/// timers that reached 1.
pub fn step_timers<T, F>(timers: &mut Vec<(Timer, T)>, mut on_progress: F)
where
    F: FnMut(&T, f64),
{
    timers.retain_mut(|(timer, payload)| match timer.step() {
        Some(progress) => {
            on_progress(payload, progress);
            progress < 1.0
        }
        None => false,
    });
}
