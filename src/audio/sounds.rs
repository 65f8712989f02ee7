//! Sound definitions and mappings
//!
//! Defines the debugger events that make noise and the default clips for each.

use serde::{Deserialize, Serialize};

/// Debugger event categories, each with its own pool of clips
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SoundCategory {
    /// Breakpoint placed
    Breakpoint,
    /// Execution stopped on a breakpoint
    BreakpointHit,
    /// Exception thrown
    ExceptionHit,
    /// Single step
    Step,
    /// Debugging session stopped
    Stop,
    /// Go to definition
    GoToDefinition,
    /// Find all references
    FindAllReferences,
    /// Debugging session started
    Start,
}

impl SoundCategory {
    /// Every category, in declaration order
    pub const ALL: [SoundCategory; 8] = [
        SoundCategory::Breakpoint,
        SoundCategory::BreakpointHit,
        SoundCategory::ExceptionHit,
        SoundCategory::Step,
        SoundCategory::Stop,
        SoundCategory::GoToDefinition,
        SoundCategory::FindAllReferences,
        SoundCategory::Start,
    ];

    /// Human readable name
    pub fn label(&self) -> &'static str {
        match self {
            SoundCategory::Breakpoint => "Breakpoint",
            SoundCategory::BreakpointHit => "Breakpoint Hit",
            SoundCategory::ExceptionHit => "Exception Hit",
            SoundCategory::Step => "Step",
            SoundCategory::Stop => "Stop",
            SoundCategory::GoToDefinition => "Go To Definition",
            SoundCategory::FindAllReferences => "Find All References",
            SoundCategory::Start => "Start",
        }
    }

    /// Clips shipped in the noise directory for this category
    pub fn default_files(&self) -> &'static [&'static str] {
        match self {
            SoundCategory::Breakpoint => &["breakpoint.wav"],
            SoundCategory::BreakpointHit => &["breakpointhit.wav"],
            SoundCategory::ExceptionHit => &["exception.wav"],
            SoundCategory::Step => &["step.wav", "kachunk.wav"],
            SoundCategory::Stop => &["stop.wav"],
            SoundCategory::GoToDefinition => &["gotodefinition.wav"],
            SoundCategory::FindAllReferences => &["findallref.wav"],
            SoundCategory::Start => &["start.wav"],
        }
    }
}

impl std::fmt::Display for SoundCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
