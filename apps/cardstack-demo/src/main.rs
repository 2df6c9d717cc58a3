use anyhow::{Context, Result};
use cardstack_testing::CardStackRobot;
use cardstack_ui::{
    CardChild, CardLayoutParams, CardStack, Point, Rect, SettlePhase, Size, ViewConfiguration,
    ATTR_BOTTOM_MAX_OFFSET_Y, ATTR_TOP_MAX_OFFSET_Y,
};

const CARD_WIDTH: f32 = 360.0;
const CARD_HEIGHT: f32 = 480.0;
const CARD_PEEK: f32 = 48.0;

/// One step of a scripted gesture.
enum Step {
    Press(f32, f32),
    Drag { to_y: f32, steps: u32, millis: i64 },
    Pause(i64),
    Release,
    Frames(i64),
    Settle,
}

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let density = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<f32>()
            .with_context(|| format!("density must be a number, got {arg:?}"))?,
        None => 1.0,
    };

    println!("=== Card Stack Demo ===");
    println!("Density {density}. Set RUST_LOG=debug to follow each settle phase.");
    println!();

    let mut robot = CardStackRobot::new(build_stack(density)?);
    let drags = robot.record_drags();

    run("slow drag up, let go past the middle", &mut robot, &[
        Step::Press(20.0, 300.0),
        Step::Drag { to_y: 60.0, steps: 8, millis: 800 },
        Step::Pause(120),
        Step::Release,
        Step::Settle,
    ]);
    run("short nudge down", &mut robot, &[
        Step::Press(20.0, 200.0),
        Step::Drag { to_y: 260.0, steps: 3, millis: 300 },
        Step::Pause(120),
        Step::Release,
        Step::Settle,
    ]);
    run("flick down", &mut robot, &[
        Step::Press(20.0, 100.0),
        Step::Drag { to_y: 220.0, steps: 6, millis: 60 },
        Step::Release,
        Step::Frames(48),
        Step::Settle,
    ]);

    log::info!(
        "{} drag callbacks over {} frames",
        drags.len(),
        robot.frame_count()
    );
    let stack = robot.into_stack();
    for child in 0..stack.child_count() {
        println!(
            "card {child}: offset {:>5}  rate {:.3}",
            stack.offset(child).unwrap_or_default(),
            stack.drag_rate(child)
        );
    }
    Ok(())
}

fn build_stack(density: f32) -> Result<CardStack> {
    let view_configuration = ViewConfiguration::for_density(density);
    let mut stack = CardStack::from_attributes(
        &[
            (ATTR_TOP_MAX_OFFSET_Y, "120dp"),
            (ATTR_BOTTOM_MAX_OFFSET_Y, "40dp"),
        ],
        &view_configuration,
    )
    .context("stack attributes")?;

    let pinned = CardLayoutParams::from_attributes(&[(ATTR_TOP_MAX_OFFSET_Y, "24dp")], density)
        .context("pinned card attributes")?;
    let cards = [
        CardChild::default(),
        CardChild::new(pinned),
        CardChild::without_params(),
    ];
    for (i, card) in cards.into_iter().enumerate() {
        let top = i as f32 * CARD_PEEK * density;
        stack.add_child(card.with_layout_rect(Rect::from_origin_size(
            Point::new(0.0, top),
            Size::new(CARD_WIDTH * density, CARD_HEIGHT * density),
        )));
    }
    Ok(stack)
}

fn run(name: &str, robot: &mut CardStackRobot, script: &[Step]) {
    log::info!("--- {name} ---");
    for step in script {
        match *step {
            Step::Press(x, y) => {
                robot.press(x, y);
            }
            Step::Drag { to_y, steps, millis } => {
                let x = robot.cursor().x;
                robot.drag_to(x, to_y, steps, millis);
                log::info!("dragged to y={to_y}: offsets {:?}", robot.offsets());
            }
            Step::Pause(millis) => robot.pause(millis),
            Step::Release => {
                robot.release();
                log::info!("released into {:?}", robot.stack().settle_phase());
            }
            Step::Frames(millis) => {
                robot.advance_time(millis);
                log::info!(
                    "after {millis}ms: {:?}, offsets {:?}",
                    robot.stack().settle_phase(),
                    robot.offsets()
                );
            }
            Step::Settle => {
                let frames = robot.wait_for_idle();
                debug_assert_eq!(robot.stack().settle_phase(), SettlePhase::Idle);
                log::info!("settled after {frames} frames: offsets {:?}", robot.offsets());
            }
        }
    }
    println!("{name}: {:?}", robot.offsets());
}
