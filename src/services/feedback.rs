//! Audio/visual feedback port
//!
//! The store reports cues and celebrations through [`Feedback`]; front ends
//! decide what, if anything, the user sees or hears.

use std::io::Write;

/// A short feedback cue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// An expense was added
    Added,
    /// An expense was deleted
    Deleted,
    /// Focus moved onto an actionable control
    Hover,
}

/// Receiver for feedback effects
pub trait Feedback {
    /// Play a short cue
    fn cue(&mut self, cue: Cue);

    /// Show the celebratory effect that follows a successful add
    fn celebrate(&mut self);
}

impl<F: Feedback + ?Sized> Feedback for Box<F> {
    fn cue(&mut self, cue: Cue) {
        (**self).cue(cue)
    }

    fn celebrate(&mut self) {
        (**self).celebrate()
    }
}

/// Feedback that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFeedback;

impl Feedback for NoFeedback {
    fn cue(&mut self, _cue: Cue) {}

    fn celebrate(&mut self) {}
}

/// Rings the terminal bell and prints a celebration line on stderr
#[derive(Debug, Clone, Copy)]
pub struct BellFeedback {
    enabled: bool,
}

impl BellFeedback {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Feedback for BellFeedback {
    fn cue(&mut self, cue: Cue) {
        // Hover has no meaning on a one-shot command line
        if !self.enabled || cue == Cue::Hover {
            return;
        }
        let mut stderr = std::io::stderr();
        let _ = write!(stderr, "\x07");
        let _ = stderr.flush();
    }

    fn celebrate(&mut self) {
        if self.enabled {
            eprintln!("🎉 🎊 🎉");
        }
    }
}

/// Feedback that remembers what it was asked to do
///
/// Used by the TUI, which drains the pending effects after each action, and
/// by tests.
#[derive(Debug, Clone, Default)]
pub struct RecordedFeedback {
    enabled: bool,
    cues: Vec<Cue>,
    celebrations: usize,
}

impl RecordedFeedback {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }

    /// Cues recorded since the last drain
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    /// Celebrations recorded since the last drain
    pub fn celebrations(&self) -> usize {
        self.celebrations
    }

    /// Take the pending cues and celebration count, leaving the recorder empty
    pub fn drain(&mut self) -> (Vec<Cue>, usize) {
        let celebrations = std::mem::take(&mut self.celebrations);
        (std::mem::take(&mut self.cues), celebrations)
    }
}

impl Feedback for RecordedFeedback {
    fn cue(&mut self, cue: Cue) {
        if self.enabled {
            self.cues.push(cue);
        }
    }

    fn celebrate(&mut self) {
        if self.enabled {
            self.celebrations += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorded_feedback_drains() {
        let mut feedback = RecordedFeedback::new(true);
        feedback.cue(Cue::Added);
        feedback.celebrate();

        assert_eq!(feedback.cues(), &[Cue::Added]);
        assert_eq!(feedback.drain(), (vec![Cue::Added], 1));
        assert!(feedback.cues().is_empty());
        assert_eq!(feedback.celebrations(), 0);
    }

    #[test]
    fn test_disabled_recorder_ignores_everything() {
        let mut feedback = RecordedFeedback::new(false);
        feedback.cue(Cue::Deleted);
        feedback.celebrate();
        assert_eq!(feedback.drain(), (vec![], 0));
    }

    #[test]
    fn test_boxed_feedback_forwards() {
        let mut boxed: Box<dyn Feedback> = Box::new(NoFeedback);
        boxed.cue(Cue::Hover);
        boxed.celebrate();
    }
}
