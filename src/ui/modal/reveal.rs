// SPDX-License-Identifier: MPL-2.0
//! Staged reveal of the modal layers.
//!
//! All three layers start together when the modal enters. The backdrop is
//! the shortest transition, the image grows over a longer one and the text
//! waits for its delay before settling, so it visibly follows the image.

use crate::config::RevealTimings;
use crate::ui::design_tokens::{motion, opacity};
use crate::ui::motion::{lerp, Transition};
use std::time::Duration;

/// Visual state of every modal layer at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealFrame {
    pub backdrop_opacity: f32,
    pub image_scale: f32,
    pub image_opacity: f32,
    /// Downward offset of the text block in logical pixels.
    pub text_offset: f32,
    pub text_opacity: f32,
}

impl RevealFrame {
    /// Layers as painted before the modal has entered.
    pub const HIDDEN: Self = Self {
        backdrop_opacity: opacity::TRANSPARENT,
        image_scale: motion::IMAGE_START_SCALE,
        image_opacity: opacity::TRANSPARENT,
        text_offset: motion::TEXT_START_OFFSET,
        text_opacity: opacity::TRANSPARENT,
    };

    /// Layers once every transition has finished.
    pub const SETTLED: Self = Self {
        backdrop_opacity: opacity::OPAQUE,
        image_scale: 1.0,
        image_opacity: opacity::OPAQUE,
        text_offset: 0.0,
        text_opacity: opacity::OPAQUE,
    };

    /// Layers `elapsed` after the modal entered.
    #[must_use]
    pub fn at(elapsed: Duration, timings: &RevealTimings) -> Self {
        let stages = Stages::new(timings);
        let backdrop = stages.backdrop.progress(elapsed);
        let image = stages.image.progress(elapsed);
        let text = stages.text.progress(elapsed);

        Self {
            backdrop_opacity: backdrop,
            image_scale: lerp(motion::IMAGE_START_SCALE, 1.0, image),
            image_opacity: image,
            text_offset: lerp(motion::TEXT_START_OFFSET, 0.0, text),
            text_opacity: text,
        }
    }
}

/// Whether every layer has settled `elapsed` after entering.
#[must_use]
pub fn is_complete(elapsed: Duration, timings: &RevealTimings) -> bool {
    let stages = Stages::new(timings);
    [stages.backdrop, stages.image, stages.text]
        .iter()
        .all(|stage| stage.is_finished(elapsed))
}

struct Stages {
    backdrop: Transition,
    image: Transition,
    text: Transition,
}

impl Stages {
    fn new(timings: &RevealTimings) -> Self {
        Self {
            backdrop: Transition::new(timings.backdrop),
            image: Transition::new(timings.image),
            text: Transition::new(timings.text).with_delay(timings.text_delay),
        }
    }
}
