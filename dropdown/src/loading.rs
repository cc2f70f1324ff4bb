//! Loading indicator shown in the trigger row while content is loading.

use dropdom::{Color, Element, Style};

/// Spinner that shows one glyph per tick.
#[derive(Debug, Clone)]
pub struct Loading {
    frames: Vec<String>,
    color: Option<Color>,
}

impl Loading {
    /// `frames` must not be empty; an empty list renders a blank cell.
    pub fn new(frames: Vec<String>) -> Self {
        Self {
            frames,
            color: None,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn frame(&self, tick: usize) -> &str {
        if self.frames.is_empty() {
            return " ";
        }
        &self.frames[tick % self.frames.len()]
    }

    pub fn render(&self, id: &str, tick: usize) -> Element {
        let mut element = Element::text(self.frame(tick)).id(id);
        if let Some(color) = self.color {
            element = element.style(Style::new().foreground(color));
        }
        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_cycle() {
        let loading = Loading::new(vec!["a".into(), "b".into()]);
        assert_eq!(loading.frame(0), "a");
        assert_eq!(loading.frame(1), "b");
        assert_eq!(loading.frame(2), "a");
    }

    #[test]
    fn empty_frames_render_blank() {
        assert_eq!(Loading::new(Vec::new()).frame(3), " ");
    }
}
