use crate::error::TimelineResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless editor usage.
///
/// It still validates frame content so tests catch invalid geometry before
/// it reaches a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_group_count: usize,
    pub last_line_count: usize,
    pub last_rect_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> TimelineResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_group_count = frame.groups.len();
        self.last_line_count = frame.line_count();
        self.last_rect_count = frame.rect_count();
        self.last_text_count = frame.text_count();
        Ok(())
    }
}
