// Example: a scroll burst coalescing into one trailing recompute.
use listwindow::{EngineEvent, ListWindow, ListWindowOptions};

fn main() {
    let options = ListWindowOptions::<u32>::new()
        .with_viewport_height(800)
        .with_overscan(3)
        .with_estimate(Some(|height: &u32| *height))
        .with_on_update(Some(|event: EngineEvent<'_, u32>| {
            if let EngineEvent::Window(update) = event {
                println!(
                    "  update: reason={:?} window={:?} slots={}",
                    update.reason,
                    update.window,
                    update.slots.len()
                );
            }
            Ok(())
        }));
    let mut list = ListWindow::new(options);

    println!("reset:");
    list.reset((0..500u32).map(|i| 80 + (i % 7) * 12));

    // Sixty wheel events in quick succession, one frame tick after another.
    println!("burst:");
    let mut now = 0;
    for step in 1..=60u64 {
        list.on_scroll(step * 90, now);
        list.tick(now);
        now += 4;
    }

    // The trailing edge fires once the stream goes quiet.
    while let Some(deadline) = list.next_deadline_ms() {
        now = now.max(deadline);
        list.tick(now);
    }
    println!(
        "settled: offset={} window={:?}",
        list.scroll_offset(),
        list.window()
    );
}
