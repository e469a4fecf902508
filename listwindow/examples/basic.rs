// Example: minimal usage and the scroll-to jump.
use listwindow::{ListWindow, ListWindowOptions};

fn main() {
    let options = ListWindowOptions::<String>::new()
        .with_viewport_height(600)
        .with_overscan(2)
        .with_estimate(Some(|row: &String| 40 + 2 * row.len() as u32));
    let mut list = ListWindow::new(options);

    list.reset((0..10_000).map(|i| format!("row {i}")));
    println!("total_height={}", list.total_height());
    println!("window={:?}", list.window());

    let mut slots = Vec::new();
    list.for_each_slot(|slot| slots.push((slot.key, slot.top, slot.height)));
    println!("first_slot={:?}", slots.first());

    let offset = list.scroll_to_index(9_999).expect("index in range");
    println!("after scroll_to_index: offset={offset} window={:?}", list.window());
}
