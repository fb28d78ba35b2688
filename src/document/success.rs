use super::field::DisplayStyle;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Smooth,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ScrollBlock {
    #[default]
    Start,
    Center,
}

/// A recorded scroll-into-view request, for hosts that render the document.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScrollRequest {
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

impl ScrollRequest {
    pub const fn smooth_center() -> Self {
        Self {
            behavior: ScrollBehavior::Smooth,
            block: ScrollBlock::Center,
        }
    }
}

/// The transient banner shown after a valid submission.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SuccessMessage {
    text: String,
    display: DisplayStyle,
}

impl SuccessMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            display: DisplayStyle::None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_visible(&self) -> bool {
        self.display.is_visible()
    }

    pub(crate) fn set_display(&mut self, display: DisplayStyle) {
        self.display = display;
    }
}
