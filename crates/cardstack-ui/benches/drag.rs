use cardstack_ui::{CardChild, CardLayoutParams, CardStack, PointerEvent, Rect};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const CARD_COUNT_SAMPLES: &[usize] = &[4, 32, 256];
const MOVES_PER_DRAG: usize = 64;
const FRAME_NANOS: u64 = 16_000_000;

fn stack_with_cards(cards: usize) -> CardStack {
    let mut stack = CardStack::default();
    stack.set_top_max_offset(-400.0);
    stack.set_bottom_max_offset(200.0);
    for i in 0..cards {
        let params = if i % 3 == 0 {
            CardLayoutParams::fixed(-100.0, 100.0)
        } else {
            CardLayoutParams::inherit()
        };
        let top = i as f32 * 40.0;
        stack.add_child(CardChild::new(params).with_layout_rect(Rect::new(0.0, top, 360.0, 480.0)));
    }
    stack.set_on_card_drag_listener(|child: usize, rate: f32| {
        black_box((child, rate));
    });
    stack
}

fn drag_up_and_down(stack: &mut CardStack) {
    stack.on_pointer_event(&PointerEvent::down(100.0, 300.0, 0));
    for step in 1..=MOVES_PER_DRAG {
        let phase = step as f32 / MOVES_PER_DRAG as f32;
        let y = 300.0 - 600.0 * (phase * std::f32::consts::PI).sin();
        stack.on_pointer_event(&PointerEvent::moved(100.0, y, step as i64 * 8));
    }
}

fn bench_pointer_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("pointer_moves");
    for &cards in CARD_COUNT_SAMPLES {
        group.bench_with_input(BenchmarkId::new("cards", cards), &cards, |b, &cards| {
            let mut stack = stack_with_cards(cards);
            b.iter(|| {
                drag_up_and_down(&mut stack);
                black_box(stack.take_layout_dirty());
            });
        });
    }
    group.finish();
}

fn bench_fling_to_rest(c: &mut Criterion) {
    let mut group = c.benchmark_group("fling_to_rest");
    for &cards in CARD_COUNT_SAMPLES {
        group.bench_with_input(BenchmarkId::new("cards", cards), &cards, |b, &cards| {
            let mut stack = stack_with_cards(cards);
            b.iter(|| {
                stack.settle(black_box(-3_000.0));
                let mut frame_time = 0;
                while stack.on_frame(frame_time) {
                    frame_time += FRAME_NANOS;
                }
                black_box(stack.offset(0));
            });
        });
    }
    group.finish();
}

criterion_group!(drag, bench_pointer_moves, bench_fling_to_rest);
criterion_main!(drag);
