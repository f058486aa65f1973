#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
}

/// Animation applied to the emphasized last name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmphasisAnimation {
    Resting,
    Glitch,
}

impl EmphasisAnimation {
    pub fn for_event(event: PointerEvent) -> Self {
        match event {
            PointerEvent::Enter => EmphasisAnimation::Glitch,
            PointerEvent::Leave => EmphasisAnimation::Resting,
        }
    }

    /// Value for the element's `animation` style property.
    pub fn css(self) -> &'static str {
        match self {
            EmphasisAnimation::Resting => "glitchText 3s infinite",
            EmphasisAnimation::Glitch => "glitch 0.3s infinite",
        }
    }
}
