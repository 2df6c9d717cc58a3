/// Observer of drag progress.
///
/// Called once per draggable child for every pointer move and every
/// animation frame, with that child's index and drag rate in `[0, 1]`.
pub trait CardDragListener {
    fn on_drag(&mut self, child: usize, rate: f32);
}

impl<F> CardDragListener for F
where
    F: FnMut(usize, f32),
{
    fn on_drag(&mut self, child: usize, rate: f32) {
        self(child, rate)
    }
}
