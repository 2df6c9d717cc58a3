//! Robot testing harness for card stacks
//!
//! A [`CardStackRobot`] owns a stack and a virtual clock. Pointer samples
//! are stamped with the clock and frames are ticked as the clock advances,
//! so gestures and settle animations play out the way a host would deliver
//! them.
//!
//! # Example
//!
//! ```
//! use cardstack_testing::CardStackRobot;
//! use cardstack_ui::{CardChild, CardStack, Rect};
//!
//! let mut stack = CardStack::default();
//! stack.set_top_max_offset(-100.0);
//! stack.add_child(CardChild::default().with_layout_rect(Rect::new(0.0, 0.0, 300.0, 200.0)));
//!
//! let mut robot = CardStackRobot::new(stack);
//! robot.drag(10.0, 100.0, 10.0, 0.0, 10, 500);
//! robot.wait_for_idle();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use cardstack_foundation::PointerEvent;
use cardstack_graphics::Point;
use cardstack_ui::CardStack;

/// Frame interval of the virtual display.
pub const FRAME_MILLIS: i64 = 16;

/// Upper bound on frames [`CardStackRobot::wait_for_idle`] will tick.
pub const MAX_IDLE_FRAMES: usize = 10_000;

/// Drives a [`CardStack`] with scripted pointer input and frame time.
pub struct CardStackRobot {
    stack: CardStack,
    cursor: Point,
    time_ms: i64,
    frames: usize,
}

impl CardStackRobot {
    pub fn new(stack: CardStack) -> Self {
        Self {
            stack,
            cursor: Point::default(),
            time_ms: 0,
            frames: 0,
        }
    }

    pub fn stack(&self) -> &CardStack {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut CardStack {
        &mut self.stack
    }

    pub fn into_stack(self) -> CardStack {
        self.stack
    }

    /// Current virtual time in milliseconds.
    pub fn time_ms(&self) -> i64 {
        self.time_ms
    }

    /// Frames ticked so far.
    pub fn frame_count(&self) -> usize {
        self.frames
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Offsets of every child, in stack order.
    pub fn offsets(&self) -> Vec<i32> {
        self.stack.children().iter().map(|child| child.offset()).collect()
    }

    /// Installs a drag listener that records every callback.
    pub fn record_drags(&mut self) -> DragLog {
        let log = DragLog::default();
        let sink = log.clone();
        self.stack
            .set_on_card_drag_listener(move |child: usize, rate: f32| sink.push(child, rate));
        log
    }

    /// Presses the pointer at `(x, y)`. Returns whether the stack consumed
    /// the event.
    pub fn press(&mut self, x: f32, y: f32) -> bool {
        self.cursor = Point::new(x, y);
        self.stack
            .on_pointer_event(&PointerEvent::down(x, y, self.time_ms))
    }

    /// Moves the pointer to `(x, y)` at the current time.
    pub fn move_to(&mut self, x: f32, y: f32) -> bool {
        self.cursor = Point::new(x, y);
        self.stack
            .on_pointer_event(&PointerEvent::moved(x, y, self.time_ms))
    }

    /// Lifts the pointer where it is.
    pub fn release(&mut self) -> bool {
        let Point { x, y } = self.cursor;
        self.stack.on_pointer_event(&PointerEvent::up(x, y, self.time_ms))
    }

    /// Cancels the gesture where the pointer is.
    pub fn cancel(&mut self) -> bool {
        let Point { x, y } = self.cursor;
        self.stack
            .on_pointer_event(&PointerEvent::cancel(x, y, self.time_ms))
    }

    /// Moves the clock forward without delivering frames, as if the finger
    /// rested while no animation was running.
    pub fn pause(&mut self, millis: i64) {
        self.time_ms += millis.max(0);
    }

    /// Moves the clock forward by `millis`, ticking a frame every
    /// [`FRAME_MILLIS`].
    pub fn advance_time(&mut self, millis: i64) {
        let end = self.time_ms + millis.max(0);
        while self.time_ms < end {
            self.time_ms = (self.time_ms + FRAME_MILLIS).min(end);
            self.tick();
        }
    }

    /// Ticks frames until the stack stops asking for them. Returns the number
    /// of frames ticked.
    ///
    /// # Panics
    ///
    /// Panics if the stack is still animating after [`MAX_IDLE_FRAMES`].
    pub fn wait_for_idle(&mut self) -> usize {
        let mut ticked = 0;
        while self.stack.is_animating() {
            assert!(
                ticked < MAX_IDLE_FRAMES,
                "card stack still animating after {MAX_IDLE_FRAMES} frames"
            );
            self.time_ms += FRAME_MILLIS;
            self.tick();
            ticked += 1;
        }
        ticked
    }

    /// Presses at `from`, moves to `to` in `steps` evenly spaced samples over
    /// `duration_ms`, then releases.
    pub fn drag(
        &mut self,
        from_x: f32,
        from_y: f32,
        to_x: f32,
        to_y: f32,
        steps: u32,
        duration_ms: i64,
    ) {
        self.press(from_x, from_y);
        self.drag_to(to_x, to_y, steps, duration_ms);
        self.release();
    }

    /// Moves the pressed pointer to `(x, y)` without releasing.
    pub fn drag_to(&mut self, x: f32, y: f32, steps: u32, duration_ms: i64) {
        let steps = steps.max(1);
        let start = self.cursor;
        let start_time = self.time_ms;
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.time_ms = start_time + duration_ms * i as i64 / steps as i64;
            self.move_to(start.x + (x - start.x) * t, start.y + (y - start.y) * t);
        }
    }

    fn tick(&mut self) {
        self.frames += 1;
        let frame_time_nanos = self.time_ms.max(0) as u64 * 1_000_000;
        self.stack.on_frame(frame_time_nanos);
    }
}

/// Shared record of drag listener callbacks.
#[derive(Clone, Debug, Default)]
pub struct DragLog {
    events: Rc<RefCell<Vec<(usize, f32)>>>,
}

impl DragLog {
    fn push(&self, child: usize, rate: f32) {
        self.events.borrow_mut().push((child, rate));
    }

    /// Every `(child, rate)` callback so far, oldest first.
    pub fn events(&self) -> Vec<(usize, f32)> {
        self.events.borrow().clone()
    }

    /// Rates reported for one child, oldest first.
    pub fn rates_for(&self, child: usize) -> Vec<f32> {
        self.events
            .borrow()
            .iter()
            .filter(|(index, _)| *index == child)
            .map(|(_, rate)| *rate)
            .collect()
    }

    pub fn last_rate(&self, child: usize) -> Option<f32> {
        self.rates_for(child).last().copied()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}
