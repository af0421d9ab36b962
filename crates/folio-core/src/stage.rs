//! Scroll card stage: scroll progress in, per-element presentation out.
//!
//! Progress `[0, 1]` is cut into `N + 3` equal segments: the folder base
//! enters in segment 0, item `i` rises in segment `i + 1`, the cover closes
//! in segment `N + 1` and the whole stack zooms out in segment `N + 2`.
//! Every function here is a pure function of progress and item index.

use crate::constants::*;

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamp progress into `[0, 1]`; NaN reads as 0.
#[inline]
pub fn clamp_progress(p: f32) -> f32 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Progress of a tall tracking region scrolling through the viewport:
/// 0 when its top meets the viewport top, 1 when its bottom meets the
/// viewport bottom.
pub fn scroll_progress(region_top: f32, region_height: f32, viewport_height: f32) -> f32 {
    let travel = region_height - viewport_height;
    if !(travel > 0.0) {
        return if region_top > 0.0 { 0.0 } else { 1.0 };
    }
    clamp_progress(-region_top / travel)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: f32,
    pub end: f32,
}

impl Segment {
    pub fn width(&self) -> f32 {
        self.end - self.start
    }

    /// Left-closed, right-open.
    pub fn contains(&self, p: f32) -> bool {
        p >= self.start && p < self.end
    }

    /// Position of `p` inside the segment, clamped to `[0, 1]`.
    pub fn local(&self, p: f32) -> f32 {
        let w = self.width();
        if w <= 0.0 {
            return if p >= self.end { 1.0 } else { 0.0 };
        }
        ((p - self.start) / w).clamp(0.0, 1.0)
    }

    /// Point `fraction` of the way through the segment.
    pub fn at(&self, fraction: f32) -> f32 {
        self.start + self.width() * fraction
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationParams {
    pub opacity: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub rotation_deg: f32,
    pub scale: f32,
}

impl AnimationParams {
    pub const REST: AnimationParams = AnimationParams {
        opacity: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
        rotation_deg: 0.0,
        scale: 1.0,
    };

    pub fn lerp(from: AnimationParams, to: AnimationParams, t: f32) -> AnimationParams {
        let t = t.clamp(0.0, 1.0);
        AnimationParams {
            opacity: lerp(from.opacity, to.opacity, t),
            offset_x: lerp(from.offset_x, to.offset_x, t),
            offset_y: lerp(from.offset_y, to.offset_y, t),
            rotation_deg: lerp(from.rotation_deg, to.rotation_deg, t),
            scale: lerp(from.scale, to.scale, t),
        }
    }

    pub fn transform_css(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0) rotate({:.2}deg) scale({:.4})",
            self.offset_x, self.offset_y, self.rotation_deg, self.scale
        )
    }

    pub fn opacity_css(&self) -> String {
        format!("{:.4}", self.opacity)
    }
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self::REST
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemPhase {
    PreEntry,
    Entry,
    Settled,
    Fanned,
}

/// Everything the rendering layer needs for one progress value.
#[derive(Clone, Debug, PartialEq)]
pub struct StageFrame {
    pub progress: f32,
    pub folder: AnimationParams,
    pub phases: Vec<ItemPhase>,
    pub cards: Vec<AnimationParams>,
    pub texts: Vec<AnimationParams>,
    pub cover: AnimationParams,
    pub stack: AnimationParams,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardStage {
    items: usize,
}

impl CardStage {
    pub fn new(item_count: usize) -> Self {
        Self { items: item_count }
    }

    pub fn item_count(&self) -> usize {
        self.items
    }

    pub fn segment_count(&self) -> usize {
        self.items + 3
    }

    /// The `k`-th segment, `[k / (N+3), (k+1) / (N+3))`.
    pub fn segment(&self, k: usize) -> Segment {
        let total = self.segment_count() as f32;
        Segment {
            start: k as f32 / total,
            end: (k + 1) as f32 / total,
        }
    }

    pub fn folder_segment(&self) -> Segment {
        self.segment(0)
    }

    pub fn item_segment(&self, index: usize) -> Segment {
        self.segment(index + 1)
    }

    pub fn cover_segment(&self) -> Segment {
        self.segment(self.items + 1)
    }

    pub fn zoom_segment(&self) -> Segment {
        self.segment(self.items + 2)
    }

    fn entry_end(seg: Segment) -> f32 {
        seg.at(STAGE_ENTRY_FRACTION)
    }

    pub fn phase(&self, index: usize, progress: f32) -> ItemPhase {
        let p = clamp_progress(progress);
        let seg = self.item_segment(index);
        if p < seg.start {
            ItemPhase::PreEntry
        } else if p < Self::entry_end(seg) {
            ItemPhase::Entry
        } else if p < seg.end {
            ItemPhase::Settled
        } else {
            ItemPhase::Fanned
        }
    }

    fn card_hidden() -> AnimationParams {
        AnimationParams {
            opacity: 0.0,
            offset_y: STAGE_CARD_ENTRY_OFFSET,
            scale: STAGE_ENTRY_SCALE,
            ..AnimationParams::REST
        }
    }

    /// Fan pose held by a card once its segment is over. Grows with the
    /// 1-based ordinal so even the first card leaves the rest pose.
    pub fn fan_pose(index: usize) -> AnimationParams {
        let k = (index + 1) as f32;
        AnimationParams {
            opacity: 1.0,
            offset_x: STAGE_FAN_OFFSET_X * k,
            offset_y: STAGE_FAN_OFFSET_Y * k,
            rotation_deg: STAGE_FAN_ROTATION_DEG * k,
            scale: 1.0,
        }
    }

    /// Card presentation for item `index` at global `progress`.
    pub fn params_for(&self, index: usize, progress: f32) -> AnimationParams {
        let p = clamp_progress(progress);
        let seg = self.item_segment(index);
        match self.phase(index, p) {
            ItemPhase::PreEntry => Self::card_hidden(),
            ItemPhase::Entry => {
                let t = (p - seg.start) / (Self::entry_end(seg) - seg.start);
                AnimationParams::lerp(Self::card_hidden(), AnimationParams::REST, t)
            }
            ItemPhase::Settled => AnimationParams::REST,
            ItemPhase::Fanned => Self::fan_pose(index),
        }
    }

    /// Text block for item `index`: fades in with the card, fades out before
    /// the segment ends and never persists past it.
    pub fn text_params(&self, index: usize, progress: f32) -> AnimationParams {
        let p = clamp_progress(progress);
        let seg = self.item_segment(index);
        let below = AnimationParams {
            opacity: 0.0,
            offset_y: STAGE_TEXT_ENTRY_OFFSET,
            scale: STAGE_ENTRY_SCALE,
            ..AnimationParams::REST
        };
        let above = AnimationParams {
            offset_y: -STAGE_TEXT_ENTRY_OFFSET,
            ..below
        };
        if p < seg.start {
            return below;
        }
        if p >= seg.end {
            return above;
        }
        let entry_end = Self::entry_end(seg);
        let exit_start = seg.at(1.0 - STAGE_TEXT_EXIT_FRACTION);
        if p < entry_end {
            AnimationParams::lerp(below, AnimationParams::REST, (p - seg.start) / (entry_end - seg.start))
        } else if p < exit_start {
            AnimationParams::REST
        } else {
            AnimationParams::lerp(AnimationParams::REST, above, (p - exit_start) / (seg.end - exit_start))
        }
    }

    pub fn folder_params(&self, progress: f32) -> AnimationParams {
        let hidden = AnimationParams {
            opacity: 0.0,
            offset_y: STAGE_FOLDER_ENTRY_OFFSET,
            scale: STAGE_ENTRY_SCALE,
            ..AnimationParams::REST
        };
        let t = self.folder_segment().local(clamp_progress(progress));
        AnimationParams::lerp(hidden, AnimationParams::REST, t)
    }

    pub fn cover_params(&self, progress: f32) -> AnimationParams {
        let hidden = AnimationParams {
            opacity: 0.0,
            offset_y: STAGE_COVER_ENTRY_OFFSET,
            rotation_deg: STAGE_COVER_ENTRY_ROTATION_DEG,
            ..AnimationParams::REST
        };
        let t = self.cover_segment().local(clamp_progress(progress));
        AnimationParams::lerp(hidden, AnimationParams::REST, t)
    }

    /// Whole composed stack (cards + cover); zooms out and fades in the last
    /// segment, fully transparent at progress 1.
    pub fn stack_params(&self, progress: f32) -> AnimationParams {
        let gone = AnimationParams {
            opacity: 0.0,
            offset_x: STAGE_FINAL_DRIFT_X,
            scale: STAGE_FINAL_SCALE,
            ..AnimationParams::REST
        };
        let t = self.zoom_segment().local(clamp_progress(progress));
        AnimationParams::lerp(AnimationParams::REST, gone, t)
    }

    pub fn frame(&self, progress: f32) -> StageFrame {
        let p = clamp_progress(progress);
        StageFrame {
            progress: p,
            folder: self.folder_params(p),
            phases: (0..self.items).map(|i| self.phase(i, p)).collect(),
            cards: (0..self.items).map(|i| self.params_for(i, p)).collect(),
            texts: (0..self.items).map(|i| self.text_params(i, p)).collect(),
            cover: self.cover_params(p),
            stack: self.stack_params(p),
        }
    }
}
