//! The card stack controller.
//!
//! Pointer samples come in through [`CardStack::on_pointer_event`], frame
//! ticks through [`CardStack::on_frame`]. Both end up in the same place:
//! a child's offset is written, layout is marked dirty and the drag listener
//! hears the child's new drag rate.

use std::fmt;

use cardstack_animation::{AnimationSpec, Easing};
use cardstack_foundation::{PointerEvent, PointerEventKind, ViewConfiguration};
use cardstack_graphics::{Point, Rect};

use crate::attributes::{AttributeError, CardStackAttributes};
use crate::config::CardStackConfig;
use crate::gesture::DragSession;
use crate::layout_params::{CardLayoutParams, OffsetBounds};
use crate::listener::CardDragListener;
use crate::offset::{self, apply_delta, drag_rate};
use crate::settle::{SettleAnimator, SettlePhase, SettleTarget};

/// One card in the stack.
#[derive(Debug, Clone, PartialEq)]
pub struct CardChild {
    offset: i32,
    params: Option<CardLayoutParams>,
    layout_rect: Rect,
}

impl CardChild {
    pub fn new(params: CardLayoutParams) -> Self {
        Self {
            offset: 0,
            params: Some(params),
            layout_rect: Rect::default(),
        }
    }

    /// A child the stack cannot drag: it is laid out and hit-tested but
    /// its offset is never touched.
    pub fn without_params() -> Self {
        Self {
            offset: 0,
            params: None,
            layout_rect: Rect::default(),
        }
    }

    pub fn with_layout_rect(mut self, layout_rect: Rect) -> Self {
        self.layout_rect = layout_rect;
        self
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn params(&self) -> Option<&CardLayoutParams> {
        self.params.as_ref()
    }

    pub fn is_draggable(&self) -> bool {
        self.params.is_some()
    }

    /// Where the host laid the card out before any offset.
    pub fn layout_rect(&self) -> Rect {
        self.layout_rect
    }

    /// On-screen rectangle: the layout rectangle moved by the offset.
    pub fn hit_rect(&self) -> Rect {
        self.layout_rect.translate(0.0, self.offset as f32)
    }
}

impl Default for CardChild {
    fn default() -> Self {
        Self::new(CardLayoutParams::default())
    }
}

pub struct CardStack {
    children: Vec<CardChild>,
    top_max_offset: f32,
    bottom_max_offset: f32,
    config: CardStackConfig,
    enabled: bool,
    session: Option<DragSession>,
    settle_animator: SettleAnimator,
    listener: Option<Box<dyn CardDragListener>>,
    layout_dirty: bool,
}

impl CardStack {
    pub fn new(config: CardStackConfig) -> Self {
        Self {
            children: Vec::new(),
            top_max_offset: 0.0,
            bottom_max_offset: 0.0,
            config,
            enabled: true,
            session: None,
            settle_animator: SettleAnimator::new(),
            listener: None,
            layout_dirty: false,
        }
    }

    /// Builds a stack from `topMaxOffsetY` / `bottomMaxOffsetY` attributes.
    pub fn from_attributes(
        attributes: &[(&str, &str)],
        view_configuration: &ViewConfiguration,
    ) -> Result<Self, AttributeError> {
        let parsed = CardStackAttributes::parse(attributes, view_configuration.density)?;
        let mut stack = Self::new(CardStackConfig::from_view_configuration(view_configuration));
        stack.set_top_max_offset(parsed.top_max_offset);
        stack.set_bottom_max_offset(parsed.bottom_max_offset);
        Ok(stack)
    }

    pub fn config(&self) -> &CardStackConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: CardStackConfig) {
        self.config = config;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// A disabled stack ignores pointer input. Running animations finish.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.session = None;
        }
    }

    pub fn top_max_offset(&self) -> f32 {
        self.top_max_offset
    }

    /// Default upward bound for cards without their own. Must be `<= 0`;
    /// positive values are replaced by 0.
    pub fn set_top_max_offset(&mut self, top_max_offset: f32) {
        self.top_max_offset = if top_max_offset > 0.0 {
            log::warn!("top max offset {top_max_offset} is above zero, using 0");
            0.0
        } else {
            top_max_offset
        };
        self.clamp_offsets();
    }

    pub fn bottom_max_offset(&self) -> f32 {
        self.bottom_max_offset
    }

    /// Default downward bound for cards without their own. Must be `>= 0`;
    /// negative values are replaced by 0.
    pub fn set_bottom_max_offset(&mut self, bottom_max_offset: f32) {
        self.bottom_max_offset = if bottom_max_offset < 0.0 {
            log::warn!("bottom max offset {bottom_max_offset} is below zero, using 0");
            0.0
        } else {
            bottom_max_offset
        };
        self.clamp_offsets();
    }

    pub fn set_on_card_drag_listener(&mut self, listener: impl CardDragListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_on_card_drag_listener(&mut self) {
        self.listener = None;
    }

    // ------------------------------------------------------------------
    // Children
    // ------------------------------------------------------------------

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn children(&self) -> &[CardChild] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&CardChild> {
        self.children.get(index)
    }

    /// Appends a child and returns its index.
    pub fn add_child(&mut self, child: CardChild) -> usize {
        self.settle_animator.cancel();
        self.children.push(child);
        self.layout_dirty = true;
        self.children.len() - 1
    }

    /// Inserts a child at `index`, clamped to the end of the stack.
    pub fn insert_child(&mut self, index: usize, child: CardChild) {
        self.settle_animator.cancel();
        let index = index.min(self.children.len());
        self.children.insert(index, child);
        self.layout_dirty = true;
    }

    pub fn remove_child(&mut self, index: usize) -> Option<CardChild> {
        if index >= self.children.len() {
            return None;
        }
        self.settle_animator.cancel();
        self.layout_dirty = true;
        Some(self.children.remove(index))
    }

    /// Replaces a child's params. `None` makes it non-draggable; otherwise
    /// its offset is pulled back inside the new bounds.
    pub fn set_child_params(&mut self, index: usize, params: Option<CardLayoutParams>) {
        let Some(child) = self.children.get_mut(index) else {
            return;
        };
        child.params = params;
        if child.params.is_some() {
            let offset = child.offset;
            self.apply_offset(index, offset);
        }
    }

    /// Called by the host's layout pass with the child's natural rectangle.
    pub fn set_child_layout_rect(&mut self, index: usize, layout_rect: Rect) {
        if let Some(child) = self.children.get_mut(index) {
            child.layout_rect = layout_rect;
        }
    }

    /// Moves a draggable child directly, clamped to its bounds.
    pub fn set_child_offset(&mut self, index: usize, offset: i32) {
        if self.children.get(index).is_some_and(CardChild::is_draggable) {
            self.apply_offset(index, offset);
        }
    }

    pub fn offset(&self, index: usize) -> Option<i32> {
        self.children.get(index).map(CardChild::offset)
    }

    /// Effective bounds of a draggable child.
    pub fn bounds(&self, index: usize) -> Option<OffsetBounds> {
        let params = self.children.get(index)?.params?;
        Some(params.resolve(self.top_max_offset, self.bottom_max_offset))
    }

    /// Drag rate of a child; 0 for children the stack cannot drag.
    pub fn drag_rate(&self, index: usize) -> f32 {
        match (self.children.get(index), self.bounds(index)) {
            (Some(child), Some(bounds)) => drag_rate(child.offset, bounds),
            _ => 0.0,
        }
    }

    /// Whether the host must lay the children out again. Reading clears it.
    pub fn take_layout_dirty(&mut self) -> bool {
        std::mem::take(&mut self.layout_dirty)
    }

    // ------------------------------------------------------------------
    // Pointer input
    // ------------------------------------------------------------------

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Dispatches a pointer sample. Returns `false` when the stack is
    /// disabled or empty and so does not consume the event.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        if !self.enabled || self.children.is_empty() {
            return false;
        }
        match event.kind {
            PointerEventKind::Down => self.on_pointer_down(event),
            PointerEventKind::Move => self.on_pointer_move(event),
            PointerEventKind::Up => self.on_pointer_up(event),
            PointerEventKind::Cancel => self.on_pointer_cancel(event),
        }
        true
    }

    pub fn hit_test(&self, point: Point) -> bool {
        self.children
            .iter()
            .any(|child| child.hit_rect().contains_point(point))
    }

    /// Starts a drag session if the pointer landed on a card. A session that
    /// starts takes the cards away from any running settle phase.
    pub fn on_pointer_down(&mut self, event: &PointerEvent) {
        if !self.hit_test(event.position) {
            self.session = None;
            return;
        }
        self.settle_animator.cancel();
        log::debug!("card drag started at y={}", event.position.y);
        self.session = Some(DragSession::start(event));
    }

    pub fn on_pointer_move(&mut self, event: &PointerEvent) {
        let damping_factor = self.config.damping_factor;
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let delta = session.on_move(event, damping_factor);
        for index in 0..self.children.len() {
            let Some(bounds) = self.bounds(index) else {
                continue;
            };
            let moved = apply_delta(self.children[index].offset, delta, bounds);
            self.apply_offset(index, moved);
        }
    }

    pub fn on_pointer_up(&mut self, event: &PointerEvent) {
        self.stop_dragging(event);
    }

    pub fn on_pointer_cancel(&mut self, event: &PointerEvent) {
        self.stop_dragging(event);
    }

    fn stop_dragging(&mut self, event: &PointerEvent) {
        let Some(session) = self.session.take() else {
            return;
        };
        let velocity = session.finish(event, self.config.max_fling_velocity);
        log::debug!(
            "card drag ended at y={} with velocity {velocity}",
            event.position.y
        );
        self.settle(velocity);
    }

    // ------------------------------------------------------------------
    // Settling
    // ------------------------------------------------------------------

    pub fn settle_phase(&self) -> SettlePhase {
        self.settle_animator.phase()
    }

    pub fn is_animating(&self) -> bool {
        self.settle_animator.is_running()
    }

    /// Targets of the running settle phase.
    pub fn settle_targets(&self) -> Vec<SettleTarget> {
        self.settle_animator.targets()
    }

    /// Releases the cards at `velocity` px/s: a fling runs inertia first,
    /// anything slower goes straight to recover.
    pub fn settle(&mut self, velocity: f32) {
        if self.config.is_fling(velocity) {
            self.start_inertia(velocity);
        } else {
            self.start_recover();
        }
    }

    pub fn cancel_settle(&mut self) {
        self.settle_animator.cancel();
    }

    /// Where each draggable child would come to rest if recover started now.
    pub fn recover_targets(&self) -> Vec<SettleTarget> {
        self.draggable()
            .map(|(index, offset, bounds)| {
                let rate = drag_rate(offset, bounds);
                SettleTarget {
                    child: index,
                    from: offset::resting_offset(rate, bounds),
                    to: offset::recover_target(rate, bounds),
                }
            })
            .collect()
    }

    /// Snaps every draggable child to its nearer resting bound.
    pub fn start_recover(&mut self) {
        let targets = self.recover_targets();
        for target in &targets {
            log::debug!(
                "recover child {} from {} to {}",
                target.child,
                target.from,
                target.to
            );
        }
        let spec = AnimationSpec::tween(self.config.recover_duration_millis, Easing::Accelerate);
        self.settle_animator.start(SettlePhase::Recover, targets, spec);
    }

    fn start_inertia(&mut self, velocity: f32) {
        log::debug!(
            "inertia at velocity {velocity}, threshold {}",
            self.config.min_fling_velocity
        );
        let velocity_divisor = self.config.velocity_divisor;
        let targets: Vec<SettleTarget> = self
            .draggable()
            .map(|(index, offset, bounds)| {
                let from = offset::resting_offset(drag_rate(offset, bounds), bounds);
                let to = offset::inertia_target(from, velocity, velocity_divisor, bounds);
                log::debug!("inertia child {index} from {from} to {to}");
                SettleTarget {
                    child: index,
                    from,
                    to,
                }
            })
            .collect();
        let spec = AnimationSpec::tween(
            self.config.inertia_duration_millis(velocity),
            Easing::Decelerate,
        );
        self.settle_animator.start(SettlePhase::Inertia, targets, spec);
    }

    /// Advances the running settle phase to `frame_time_nanos`. Returns
    /// whether the stack wants another frame.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> bool {
        let Some(frame) = self.settle_animator.on_frame(frame_time_nanos) else {
            return false;
        };
        log::trace!("settle {:?} frame at {frame_time_nanos}", frame.phase);
        for (index, value) in frame.offsets {
            // Truncate toward zero so a card resting on a bound stays there.
            self.apply_offset(index, value as i32);
        }
        if frame.finished && frame.phase == SettlePhase::Inertia {
            self.start_recover();
        }
        self.settle_animator.is_running()
    }

    // ------------------------------------------------------------------

    fn draggable(&self) -> impl Iterator<Item = (usize, i32, OffsetBounds)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(move |(index, child)| {
                let params = child.params?;
                let bounds = params.resolve(self.top_max_offset, self.bottom_max_offset);
                Some((index, child.offset, bounds))
            })
    }

    /// Pulls offsets left outside narrowed bounds back in.
    fn clamp_offsets(&mut self) {
        let escaped: Vec<(usize, i32)> = self
            .draggable()
            .filter(|(_, offset, bounds)| !bounds.contains(*offset))
            .map(|(index, offset, _)| (index, offset))
            .collect();
        for (index, offset) in escaped {
            self.apply_offset(index, offset);
        }
    }

    /// The one place a child's offset changes.
    fn apply_offset(&mut self, index: usize, offset: i32) {
        let Some(bounds) = self.bounds(index) else {
            return;
        };
        let offset = bounds.clamp(offset);
        self.children[index].offset = offset;
        self.layout_dirty = true;
        if let Some(listener) = self.listener.as_mut() {
            listener.on_drag(index, drag_rate(offset, bounds));
        }
    }
}

impl Default for CardStack {
    fn default() -> Self {
        Self::new(CardStackConfig::default())
    }
}

impl fmt::Debug for CardStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardStack")
            .field("children", &self.children)
            .field("top_max_offset", &self.top_max_offset)
            .field("bottom_max_offset", &self.bottom_max_offset)
            .field("config", &self.config)
            .field("enabled", &self.enabled)
            .field("dragging", &self.session.is_some())
            .field("settle_phase", &self.settle_animator.phase())
            .field("layout_dirty", &self.layout_dirty)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "tests/card_stack_tests.rs"]
mod tests;
