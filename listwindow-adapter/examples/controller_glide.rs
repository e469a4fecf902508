// Example: a controller-driven glide in a frame loop.
use listwindow::ListWindowOptions;
use listwindow_adapter::{Controller, Easing};

fn main() {
    let options = ListWindowOptions::<u64>::new()
        .with_viewport_height(400)
        .with_overscan(2)
        .with_estimated_height(48);
    let mut controller = Controller::new(options);
    controller.engine_mut().reset(0u64..5_000);

    let target = controller
        .glide_to_index(3_200, 0, 240, Easing::SmoothStep)
        .expect("index in range");
    println!("target_offset={target}");

    let mut now = 0u64;
    while controller.is_gliding() {
        now += 16;
        if let Some(offset) = controller.tick(now) {
            if now % 80 == 0 {
                println!(
                    "t={now} offset={offset} visible={:?}",
                    controller.engine().visible_window()
                );
            }
        }
    }

    println!(
        "done: offset={} window={:?}",
        controller.engine().scroll_offset(),
        controller.engine().window()
    );
}
